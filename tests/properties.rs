use dynmat::{ContainerError, DynamicMatrix, DynamicVector};
use proptest::prelude::*;

type Rows = Vec<Vec<i64>>;

fn square(max_dimension: usize) -> impl Strategy<Value = Rows> {
    (1..=max_dimension).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(-100i64..100, n), n)
    })
}

fn triple(max_dimension: usize) -> impl Strategy<Value = (Rows, Rows, Rows)> {
    (1..=max_dimension).prop_flat_map(|n| {
        let rows = || prop::collection::vec(prop::collection::vec(-100i64..100, n), n);
        (rows(), rows(), rows())
    })
}

proptest! {
    #[test]
    fn new_vector_is_zeroed(n in 1usize..512) {
        let v = DynamicVector::<f64>::new(n).unwrap();
        prop_assert_eq!(v.len(), n);
        prop_assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn index_past_the_end_fails(n in 1usize..64, past in 0usize..64) {
        let v = DynamicVector::<i32>::new(n).unwrap();
        let index = n + past;
        prop_assert_eq!(v.at(index), Err(ContainerError::IndexOutOfRange { index, len: n }));
    }

    #[test]
    fn copies_are_independent(data in prop::collection::vec(any::<i32>(), 1..64)) {
        let original = DynamicVector::from_slice(&data).unwrap();
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);
        for x in copy.iter_mut() {
            *x = x.wrapping_add(1);
        }
        prop_assert_eq!(original.as_slice(), data.as_slice());
        prop_assert_ne!(copy, original);
    }

    #[test]
    fn different_lengths_are_unequal(a in 1usize..32, b in 1usize..32) {
        prop_assume!(a != b);
        prop_assert_ne!(DynamicVector::<i32>::new(a).unwrap(), DynamicVector::<i32>::new(b).unwrap());
        prop_assert_ne!(DynamicMatrix::<i32>::new(a).unwrap(), DynamicMatrix::<i32>::new(b).unwrap());
    }

    #[test]
    fn identity_is_neutral(rows in square(8)) {
        let x = DynamicMatrix::from_rows(rows).unwrap();
        let i = DynamicMatrix::<i64>::identity(x.size()).unwrap();
        prop_assert_eq!(&i * &x, x.clone());
        prop_assert_eq!(&x * &i, x);
    }

    #[test]
    fn matmul_is_associative(abc in triple(6)) {
        let (a, b, c) = abc;
        let a = DynamicMatrix::from_rows(a).unwrap();
        let b = DynamicMatrix::from_rows(b).unwrap();
        let c = DynamicMatrix::from_rows(c).unwrap();
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn matvec_agrees_with_row_dot(rows in square(8), seed in any::<i64>()) {
        let m = DynamicMatrix::from_rows(rows).unwrap();
        let v = DynamicVector::from_fn(m.size(), |i| (seed.wrapping_add(i as i64)) % 50).unwrap();
        let product = &m * &v;
        for (row, x) in m.rows().zip(product.iter()) {
            prop_assert_eq!(row.dot(&v).unwrap(), *x);
        }
    }

    #[test]
    fn add_then_sub_restores(a in square(8)) {
        let n = a.len();
        let original = DynamicMatrix::from_rows(a).unwrap();
        let other = DynamicMatrix::from_fn(n, |i, j| (i * n + j) as i64).unwrap();
        let mut m = original.clone();
        m.add_matrix(&other).unwrap();
        m.sub_matrix(&other).unwrap();
        prop_assert_eq!(m, original);
    }
}
