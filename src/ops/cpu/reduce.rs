//! CPU implementation of reduce operations.

use crate::algorithm::Algorithm;
use crate::dtype::Element;
use crate::error::Result;
use crate::ops::{ReduceOp, ReduceOps};
use crate::runtime::cpu::{
    CpuClient,
    helpers::{Operands, reduce_impl},
};

/// ReduceOps implementation for CPU runtime.
impl ReduceOps for CpuClient {
    fn sum<T: Element>(
        &self,
        values: &[T],
        algorithm: Algorithm,
        num_threads: Option<usize>,
    ) -> Result<T> {
        reduce_impl(self, ReduceOp::Sum, Operands::Unary(values), algorithm, num_threads)
    }

    fn dot<T: Element>(
        &self,
        x: &[T],
        y: &[T],
        algorithm: Algorithm,
        num_threads: Option<usize>,
    ) -> Result<T> {
        reduce_impl(self, ReduceOp::Dot, Operands::Binary(x, y), algorithm, num_threads)
    }

    fn norm2<T: Element>(
        &self,
        values: &[T],
        algorithm: Algorithm,
        num_threads: Option<usize>,
    ) -> Result<T> {
        let squared = reduce_impl(
            self,
            ReduceOp::Dot,
            Operands::Binary(values, values),
            algorithm,
            num_threads,
        )?;
        Ok(squared.sqrt())
    }
}
