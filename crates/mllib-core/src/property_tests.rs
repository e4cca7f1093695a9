//! Property-based tests for tensor operations
//!
//! This module uses proptest to verify sizing, indexing and arithmetic
//! properties across randomly generated shapes and values.

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, Tensor, TensorError};
    use proptest::prelude::*;

    // Strategy for generating valid tensor shapes (1-4D, reasonable sizes)
    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..6, 1..=4)
    }

    // Shapes that may contain zero-sized dimensions, including rank 0
    fn any_shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(0usize..5, 0..=4)
    }

    /// Every coordinate vector of `shape`, in row-major order
    fn coordinates(shape: &[usize]) -> Vec<Vec<usize>> {
        let mut coords = vec![Vec::new()];
        for &dim in shape {
            coords = coords
                .into_iter()
                .flat_map(|prefix| {
                    (0..dim).map(move |i| {
                        let mut c = prefix.clone();
                        c.push(i);
                        c
                    })
                })
                .collect();
        }
        coords
    }

    /// Matrix with entries drawn from a small integer range
    fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Tensor<i64>> {
        prop::collection::vec(-50i64..50, rows * cols)
            .prop_map(move |data| Tensor::from_vec(data, &[rows, cols]).unwrap())
    }

    #[test]
    fn test_coordinates_helper() {
        assert_eq!(
            coordinates(&[2, 2]),
            vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
        );
        assert_eq!(coordinates(&[]), vec![Vec::<usize>::new()]);
        assert!(coordinates(&[3, 0]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_size_is_product(shape in any_shape_strategy()) {
            let tensor = Tensor::<f64>::zeros(&shape);
            let expected: usize = shape.iter().product();

            prop_assert_eq!(tensor.size(), expected);
            prop_assert_eq!(tensor.shape(), shape.as_slice());
            prop_assert_eq!(tensor.rank(), shape.len());
        }

        #[test]
        fn prop_fill_value_everywhere(shape in shape_strategy(), value in -1000i32..1000) {
            let tensor = Tensor::full(&shape, value);

            for coord in coordinates(&shape) {
                prop_assert_eq!(*tensor.at(&coord).unwrap(), value);
            }
        }

        #[test]
        fn prop_coordinates_enumerate_flat_buffer(shape in shape_strategy()) {
            let tensor = Tensor::<f32>::zeros(&shape);

            for (expected, coord) in coordinates(&shape).iter().enumerate() {
                prop_assert_eq!(tensor.flat_index(coord).unwrap(), expected);
            }
        }

        #[test]
        fn prop_write_then_read(
            shape in shape_strategy(),
            seed in any::<prop::sample::Index>(),
            value in 1i64..1_000_000
        ) {
            let coords = coordinates(&shape);
            let target = &coords[seed.index(coords.len())];

            let mut tensor = Tensor::<i64>::zeros(&shape);
            *tensor.at_mut(target).unwrap() = value;

            for coord in &coords {
                let expected = if coord == target { value } else { 0 };
                prop_assert_eq!(*tensor.at(coord).unwrap(), expected);
            }
        }

        #[test]
        fn prop_wrong_index_count_fails(
            shape in shape_strategy(),
            indices in prop::collection::vec(0usize..10, 0..=6)
        ) {
            prop_assume!(indices.len() != shape.len());
            let tensor = Tensor::<f64>::zeros(&shape);

            let err = tensor.at(&indices).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::OutOfRange);
            let is_dimension_mismatch = matches!(err, TensorError::DimensionMismatch { .. });
            prop_assert!(is_dimension_mismatch);
        }

        #[test]
        fn prop_checked_get_matches_at(shape in shape_strategy()) {
            let data: Vec<u32> = (0..shape.iter().product::<usize>() as u32).collect();
            let tensor = Tensor::from_vec(data, &shape).unwrap();

            for coord in coordinates(&shape) {
                prop_assert_eq!(tensor.get(&coord).unwrap(), tensor.at(&coord).unwrap());
            }
        }

        #[test]
        fn prop_add_elementwise(
            shape in shape_strategy(),
            a_val in -1000i64..1000,
            b_val in -1000i64..1000
        ) {
            let size: usize = shape.iter().product();
            let a = Tensor::from_vec((0..size as i64).map(|i| i + a_val).collect(), &shape).unwrap();
            let b = Tensor::full(&shape, b_val);

            let c = a.add(&b).unwrap();
            prop_assert_eq!(c.shape(), shape.as_slice());
            for coord in coordinates(&shape) {
                prop_assert_eq!(
                    *c.at(&coord).unwrap(),
                    *a.at(&coord).unwrap() + *b.at(&coord).unwrap()
                );
            }
        }

        #[test]
        fn prop_add_commutative(shape in shape_strategy(), x in -100.0f64..100.0, y in -100.0f64..100.0) {
            let a = Tensor::full(&shape, x);
            let b = Tensor::full(&shape, y);

            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn prop_add_shape_mismatch(a_shape in shape_strategy(), b_shape in shape_strategy()) {
            prop_assume!(a_shape != b_shape);
            let a = Tensor::<f32>::zeros(&a_shape);
            let b = Tensor::<f32>::zeros(&b_shape);

            let err = a.add(&b).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            let is_shape_mismatch = matches!(err, TensorError::ShapeMismatch { .. });
            prop_assert!(is_shape_mismatch);
        }

        #[test]
        fn prop_matmul_rank_error(shape in shape_strategy()) {
            prop_assume!(shape.len() != 2);
            let a = Tensor::<f64>::zeros(&shape);
            let m = Tensor::<f64>::zeros(&[2, 2]);

            let is_rank_error = matches!(a.matmul(&m), Err(TensorError::RankError { .. }));
            prop_assert!(is_rank_error);
            let is_rank_error = matches!(m.matmul(&a), Err(TensorError::RankError { .. }));
            prop_assert!(is_rank_error);
        }

        #[test]
        fn prop_matmul_inner_mismatch(m in 1usize..5, k1 in 1usize..5, k2 in 1usize..5, n in 1usize..5) {
            prop_assume!(k1 != k2);
            let a = Tensor::<i32>::zeros(&[m, k1]);
            let b = Tensor::<i32>::zeros(&[k2, n]);

            prop_assert_eq!(
                a.matmul(&b).unwrap_err(),
                TensorError::InnerDimensionMismatch { m, k1, k2, n }
            );
        }

        #[test]
        fn prop_matmul_result_overflow_rejected(m in (usize::MAX / 2)..=usize::MAX, n in 3usize..64) {
            // Zero inner dimension: both operands are empty, the result is not countable.
            let a = Tensor::<u8>::zeros(&[m, 0]);
            let b = Tensor::<u8>::zeros(&[0, n]);

            let err = a.matmul(&b).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            let is_invalid_shape = matches!(err, TensorError::InvalidShape { .. });
            prop_assert!(is_invalid_shape);
        }

        #[test]
        fn prop_matmul_matches_definition(
            (a, b) in (1usize..5, 1usize..5, 1usize..5)
                .prop_flat_map(|(m, k, n)| (matrix_strategy(m, k), matrix_strategy(k, n)))
        ) {
            let (m, k, n) = (a.shape()[0], a.shape()[1], b.shape()[1]);
            let c = a.matmul(&b).unwrap();
            prop_assert_eq!(c.shape(), &[m, n]);

            for i in 0..m {
                for j in 0..n {
                    let expected: i64 = (0..k)
                        .map(|p| a.at(&[i, p]).unwrap() * b.at(&[p, j]).unwrap())
                        .sum();
                    prop_assert_eq!(*c.at(&[i, j]).unwrap(), expected);
                }
            }
        }

        #[test]
        fn prop_matmul_leaves_operands_unchanged(
            (a, b) in (1usize..4, 1usize..4, 1usize..4)
                .prop_flat_map(|(m, k, n)| (matrix_strategy(m, k), matrix_strategy(k, n)))
        ) {
            let (a_before, b_before) = (a.clone(), b.clone());
            let _ = a.matmul(&b).unwrap();
            prop_assert_eq!(a, a_before);
            prop_assert_eq!(b, b_before);
        }
    }
}
