//! Native functions over [`Value`] arguments.
//!
//! Every operation in this crate is registered here under a kebab-case name
//! with a fixed arity. Arguments are type checked before the typed operation
//! runs, and errors pick up the function name as a stack frame.

use primer_foundation::{Error, PrimerVec, Result, Type, Value};

use crate::{accumulate, collection, math, string};

/// Native function callable by name.
#[derive(Clone, Copy)]
pub struct NativeFn {
    /// Function name used for lookup and in error frames.
    pub name: &'static str,
    /// Exact number of arguments.
    pub arity: usize,
    /// Function pointer.
    pub func: fn(&[Value]) -> Result<Value>,
}

impl NativeFn {
    /// Checks arity and invokes the function.
    ///
    /// # Errors
    ///
    /// Returns an arity mismatch, or whatever the function itself returns,
    /// with this function's name pushed as a stack frame.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        if args.len() != self.arity {
            return Err(
                Error::arity_mismatch(self.arity.to_string(), args.len()).with_frame(self.name)
            );
        }
        (self.func)(args).map_err(|e| e.with_frame(self.name))
    }
}

impl std::fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn {}/{}>", self.name, self.arity)
    }
}

static NATIVES: &[NativeFn] = &[
    NativeFn {
        name: "add",
        arity: 2,
        func: native_add,
    },
    NativeFn {
        name: "multiply",
        arity: 2,
        func: native_multiply,
    },
    NativeFn {
        name: "double-all",
        arity: 1,
        func: native_double_all,
    },
    NativeFn {
        name: "reverse",
        arity: 1,
        func: native_reverse,
    },
    NativeFn {
        name: "complex-calc",
        arity: 1,
        func: native_complex_calc,
    },
    NativeFn {
        name: "alternating-calc",
        arity: 1,
        func: native_alternating_calc,
    },
];

/// Looks up a native function by name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static NativeFn> {
    NATIVES.iter().find(|f| f.name == name)
}

/// Returns every registered native function.
pub fn natives() -> impl Iterator<Item = &'static NativeFn> {
    NATIVES.iter()
}

/// Looks up `name` and calls it with `args`.
///
/// # Errors
///
/// Returns [`ErrorKind::UndefinedFunction`](primer_foundation::ErrorKind::UndefinedFunction)
/// for unknown names, otherwise whatever [`NativeFn::call`] returns.
pub fn call(name: &str, args: &[Value]) -> Result<Value> {
    lookup(name)
        .ok_or_else(|| Error::undefined_function(name))?
        .call(args)
}

// =============================================================================
// Argument helpers
// =============================================================================

fn int_arg(args: &[Value], index: usize) -> Result<i64> {
    match args.get(index) {
        Some(Value::Int(n)) => Ok(*n),
        other => Err(Error::type_mismatch(
            Type::Int,
            other.map_or(Type::Nil, Value::value_type),
        )),
    }
}

fn count_arg(args: &[Value], index: usize) -> Result<u32> {
    let n = int_arg(args, index)?;
    u32::try_from(n).map_err(|_| Error::out_of_range(n, 0, i64::from(u32::MAX)))
}

fn str_arg(args: &[Value], index: usize) -> Result<&str> {
    match args.get(index) {
        Some(Value::String(s)) => Ok(s.as_ref()),
        other => Err(Error::type_mismatch(
            Type::String,
            other.map_or(Type::Nil, Value::value_type),
        )),
    }
}

fn int_vec_arg(args: &[Value], index: usize) -> Result<PrimerVec<i64>> {
    match args.get(index) {
        Some(Value::Vec(items)) => items
            .iter()
            .map(|item| {
                item.as_int()
                    .ok_or_else(|| Error::type_mismatch(Type::Int, item.value_type()))
            })
            .collect(),
        other => Err(Error::type_mismatch(
            Type::vec(Type::Int),
            other.map_or(Type::Nil, Value::value_type),
        )),
    }
}

// =============================================================================
// Natives
// =============================================================================

fn native_add(args: &[Value]) -> Result<Value> {
    math::add(int_arg(args, 0)?, int_arg(args, 1)?).map(Value::Int)
}

fn native_multiply(args: &[Value]) -> Result<Value> {
    math::multiply(int_arg(args, 0)?, int_arg(args, 1)?).map(Value::Int)
}

fn native_double_all(args: &[Value]) -> Result<Value> {
    let doubled = collection::double_all(&int_vec_arg(args, 0)?)?;
    Ok(Value::Vec(doubled.into_iter().map(Value::Int).collect()))
}

fn native_reverse(args: &[Value]) -> Result<Value> {
    Ok(Value::from(string::reverse(str_arg(args, 0)?)))
}

fn native_complex_calc(args: &[Value]) -> Result<Value> {
    accumulate::complex_calc(count_arg(args, 0)?).map(Value::Int)
}

fn native_alternating_calc(args: &[Value]) -> Result<Value> {
    accumulate::alternating_calc(count_arg(args, 0)?).map(Value::Int)
}
