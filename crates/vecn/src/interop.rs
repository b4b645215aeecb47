//! Conversions between [`Vector`] and [`nalgebra::SVector`].

use nalgebra::{SVector, Scalar};

use crate::Vector;

impl<T: Scalar, const N: usize> From<SVector<T, N>> for Vector<T, N> {
    fn from(v: SVector<T, N>) -> Self {
        let [column] = v.data.0;
        Vector::from(column)
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Converts this vector to an [`nalgebra::SVector`] with the same elements.
    pub fn to_nalgebra(self) -> SVector<T, N> {
        SVector::from_array_storage(nalgebra::ArrayStorage([self.into_array()]))
    }
}
