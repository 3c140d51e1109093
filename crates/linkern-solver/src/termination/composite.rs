//! Composite termination conditions (AND/OR) over tuples.

use super::Termination;
use crate::scope::SolverScope;

/// Stops when any child stops.
///
/// # Examples
///
/// ```
/// use linkern_solver::termination::{OrTermination, SweepCountTermination, TimeTermination};
///
/// // 30 seconds or 50 sweeps, whichever comes first
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     SweepCountTermination::new(50),
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Stops only when every child stops.
#[derive(Debug, Clone)]
pub struct AndTermination<T>(pub T);

impl<T> AndTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_tuple_termination {
    ($wrapper:ident, $init:literal, $op:tt; $($idx:tt: $T:ident),+) => {
        impl<$($T: Termination),+> Termination for $wrapper<($($T,)+)> {
            fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
                $init $($op (self.0).$idx.is_terminated(solver_scope))+
            }
        }
    };
}

macro_rules! impl_composites {
    ($($idx:tt: $T:ident),+) => {
        impl_tuple_termination!(OrTermination, false, ||; $($idx: $T),+);
        impl_tuple_termination!(AndTermination, true, &&; $($idx: $T),+);
    };
}

impl_composites!(0: T0);
impl_composites!(0: T0, 1: T1);
impl_composites!(0: T0, 1: T1, 2: T2);
impl_composites!(0: T0, 1: T1, 2: T2, 3: T3);
impl_composites!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
