//! Serde support for the fixed-size containers (feature `serde`).
//!
//! Vectors and points serialize as sequences `[x, y, z]`, matrices as a
//! sequence of rows `[[m00, m01], [m10, m11]]`. Deserialization checks the
//! lengths against the const dimensions.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::{Matrix, Point, Vector};

struct ArrayVisitor<const N: usize, T>(PhantomData<T>);

impl<'de, const N: usize, T: Deserialize<'de>> Visitor<'de> for ArrayVisitor<N, T> {
    type Value = [T; N];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of length {}", N)
    }

    /// Reads at most `N + 1` elements; a longer input is rejected as soon as
    /// the first surplus element is seen.
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<[T; N], A::Error> {
        let mut items = Vec::with_capacity(N);
        for i in 0..N {
            match seq.next_element()? {
                Some(item) => items.push(item),
                None => return Err(de::Error::invalid_length(i, &self)),
            }
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        items
            .try_into()
            .map_err(|_| de::Error::invalid_length(N, &self))
    }
}

fn deserialize_array<'de, const N: usize, T, D>(deserializer: D) -> Result<[T; N], D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    deserializer.deserialize_seq(ArrayVisitor::<N, T>(PhantomData))
}

impl<const N: usize, T: Serialize> Serialize for Vector<N, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data.iter())
    }
}

impl<'de, const N: usize, T: Deserialize<'de>> Deserialize<'de> for Vector<N, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_array(deserializer).map(Self::from_array)
    }
}

impl<const N: usize, T: Serialize> Serialize for Point<N, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data.iter())
    }
}

impl<'de, const N: usize, T: Deserialize<'de>> Deserialize<'de> for Point<N, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_array(deserializer).map(Self::from_array)
    }
}

impl<const ROW: usize, const COL: usize, T: Serialize> Serialize for Matrix<ROW, COL, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.m.iter().map(|row| row.as_slice()))
    }
}

impl<'de, const ROW: usize, const COL: usize, T: Deserialize<'de>> Deserialize<'de>
    for Matrix<ROW, COL, T>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows: [Vector<COL, T>; ROW] = deserialize_array(deserializer)?;
        Ok(Self::from_rows(rows.map(Vector::to_array)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix, Point3f, Vector3f};

    #[test]
    fn test_vector_json() {
        let v = Vector3f::new(1.0, 2.5, -3.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,2.5,-3.0]");
        assert_eq!(serde_json::from_str::<Vector3f>(&json).unwrap(), v);
    }

    #[test]
    fn test_point_json() {
        let p: Point3f = serde_json::from_str("[0.0, 1.0, 2.0]").unwrap();
        assert_eq!(p, Point3f::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_matrix_json() {
        let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1,2,3],[4,5,6]]");
        assert_eq!(serde_json::from_str::<Matrix<2, 3, i32>>(&json).unwrap(), m);
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(serde_json::from_str::<Vector3f>("[1.0, 2.0]").is_err());
        assert!(serde_json::from_str::<Matrix<2, 2, i32>>("[[1, 2], [3, 4], [5, 6]]").is_err());
        assert!(serde_json::from_str::<Matrix<2, 2, i32>>("[[1, 2], [3]]").is_err());
    }

    #[test]
    fn test_long_input_stops_at_first_surplus() {
        // the element after the surplus one is never parsed
        let err = serde_json::from_str::<Vector3f>(r#"[1.0, 2.0, 3.0, 4.0, "junk"]"#).unwrap_err();
        assert!(err.to_string().contains("invalid length 4"), "{}", err);

        let err = serde_json::from_str::<Vector3f>("[1.0]").unwrap_err();
        assert!(err.to_string().contains("invalid length 1"), "{}", err);
    }
}
