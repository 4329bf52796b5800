use std::fmt;

use crs_matrix::data::linear_algebra::error::MatrixError;
use crs_matrix::data::linear_algebra::matrix::SparseMatrix;
use crs_matrix::data::linear_algebra::traits::SparseElement;

/// An element type without a numeric zero.
#[derive(Clone, Debug, PartialEq)]
struct Symbol(&'static str);

impl SparseElement for Symbol {
    fn structural_zero() -> Self {
        Symbol("0")
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[test]
fn custom_element_type() {
    let mut m = SparseMatrix::<Symbol>::new(2, 2);
    m.element(0, 1).write(Symbol("x")).unwrap();
    m.element(1, 0).write(Symbol("y")).unwrap();

    assert_eq!(m.get_element(1, 1), Ok(Symbol("0")));
    assert_eq!(m.to_string(), "[2,2]((0,x),(y,0))");

    let mut v = SparseMatrix::<Symbol>::new(3, 1);
    v.element_at(2).write(Symbol("z")).unwrap();
    assert_eq!(v.to_string(), "[3](0,0,z)");
    assert_eq!(SparseMatrix::from_scalar(Symbol("s")).to_string(), "s");
}

#[test]
fn appends_to_existing_output() {
    let mut out = String::from("a = ");
    SparseMatrix::<i32>::from_vec(vec![1i32, 2]).print(&mut out).unwrap();
    out.push_str("; b = ");
    SparseMatrix::<i32>::new(0, 2).print(&mut out).unwrap();
    out.push_str("; c = ");
    SparseMatrix::from_scalar(7).print(&mut out).unwrap();

    assert_eq!(out, "a = [2](1,2); b = <empty expression>; c = 7");
}

#[test]
fn written_through_handles() {
    let mut m = SparseMatrix::<i32>::new(2, 2);
    for (index, value) in (1..=4).enumerate() {
        m.element(index / 2, index % 2).write(value).unwrap();
    }

    assert_eq!(m, SparseMatrix::<i32>::from_vec_with_shape(vec![1i32, 2, 3, 4], 2, 2).unwrap());
    assert_eq!(m.to_string(), "[2,2]((1,2),(3,4))");
}

#[test]
fn unstored_positions_render_as_zero() {
    let mut m = SparseMatrix::<f64>::new(3, 2);
    m.element(2, 1).write(0.5).unwrap();
    m.element(0, 0).write(-1.0).unwrap();

    assert_eq!(m.nnz(), 2);
    assert_eq!(m.to_string(), "[3,2]((-1,0),(0,0),(0,0.5))");
}

#[test]
fn reinitialized() {
    let mut m = SparseMatrix::<i32>::from_vec(vec![1i32, 2]);

    m.make_dense(1, 1, 9);
    assert_eq!(m.to_string(), "9");

    m.make_empty(0, 3);
    assert_eq!(m.to_string(), "<empty expression>");
}

#[test]
fn presentations_called_directly() {
    let m = SparseMatrix::<i32>::from_vec_with_shape(vec![1i32, 2, 3, 4, 5, 6], 3, 2).unwrap();

    let mut out = String::new();
    m.print_matrix(&mut out).unwrap();
    assert_eq!(out, "[3,2]((1,2),(3,4),(5,6))");

    // Only the first column
    let mut out = String::new();
    m.print_vector(&mut out).unwrap();
    assert_eq!(out, "[3](1,3,5)");

    let mut out = String::new();
    assert!(matches!(m.print_scalar(&mut out), Err(MatrixError::InvalidPrintTarget { .. })));
}
