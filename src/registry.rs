//! Export shim: binds native functions by name into a loadable namespace.
//!
//! A loader calls [`open`] once and hands the returned [`Namespace`] to the
//! script, which then calls `hashcode(value)` through it.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::hash;
use crate::value::{Identity, Value};

/// Native function calling convention: positional arguments in, one number
/// out.
pub type NativeFn = fn(&[Value<'_>]) -> f64;

/// A named native function, one row of a registration list.
#[derive(Clone, Copy)]
pub struct Reg {
    /// Name the function is bound under.
    pub name: &'static str,
    /// The function.
    pub func: NativeFn,
}

impl fmt::Debug for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reg").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Functions exported by this module.
pub const FUNCTIONS: &[Reg] = &[Reg {
    name: "hashcode",
    func: l_hashcode,
}];

/// `hashcode(value)` as seen by a script.
///
/// Hashes the first argument. A missing argument reads as a null reference
/// and hashes to `0`; extra arguments are ignored.
#[must_use]
pub fn l_hashcode(args: &[Value<'_>]) -> f64 {
    let value = args
        .first()
        .copied()
        .unwrap_or(Value::Other(Identity::NULL));
    f64::from(hash::hashcode(&value))
}

/// Table of native functions handed back to the loader.
#[derive(Clone, Default)]
pub struct Namespace {
    funcs: BTreeMap<&'static str, NativeFn>,
}

impl Namespace {
    /// Creates an empty namespace.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            funcs: BTreeMap::new(),
        }
    }

    /// Returns the number of bound functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    /// Binds `func` under `name`, replacing any previous binding.
    pub fn set(&mut self, name: &'static str, func: NativeFn) {
        log::debug!("binding native function '{name}'");
        self.funcs.insert(name, func);
    }

    /// Returns the function bound under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<NativeFn> {
        self.funcs.get(name).copied()
    }

    /// Calls the function bound under `name` with `args`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedFunction`] if `name` is not bound.
    pub fn call(&self, name: &str, args: &[Value<'_>]) -> Result<f64> {
        let Some(func) = self.get(name) else {
            log::warn!("call to undefined function '{name}'");
            return Err(Error::UndefinedFunction(name.to_owned()));
        };
        log::trace!("calling '{name}' with {} argument(s)", args.len());
        Ok(func(args))
    }

    /// Iterates over bound names in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.funcs.keys().copied()
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.funcs.keys()).finish()
    }
}

/// Binds every entry of `regs` into `ns`. Later entries win on name clashes.
pub fn set_funcs(ns: &mut Namespace, regs: &[Reg]) {
    for reg in regs {
        ns.set(reg.name, reg.func);
    }
}

/// Module entry point: a fresh namespace with [`FUNCTIONS`] bound.
#[must_use]
pub fn open() -> Namespace {
    let mut ns = Namespace::new();
    set_funcs(&mut ns, FUNCTIONS);
    log::debug!("opened namespace with {} function(s)", ns.len());
    ns
}
