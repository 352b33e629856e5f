//! Log classes and the name table that resolves them.
//!
//! Each class of audited SQL activity occupies one bit of a [`LogClass`]
//! word. Operators name classes in the `pgaudit.log` setting; the spelling of
//! those names, the `-` negation marker and the two meta-names `none` and
//! `all` are what existing deployments write, so they are fixed here.
//!
//! | Name | Bits |
//! |------|------|
//! | `ddl` | [`DDL`](LogClass::DDL) |
//! | `function` | [`FUNCTION`](LogClass::FUNCTION) |
//! | `misc` | [`MISC`](LogClass::MISC) and [`MISC_SET`](LogClass::MISC_SET) |
//! | `misc_set` | [`MISC_SET`](LogClass::MISC_SET) |
//! | `read` | [`READ`](LogClass::READ) |
//! | `role` | [`ROLE`](LogClass::ROLE) |
//! | `write` | [`WRITE`](LogClass::WRITE) |
//! | `none` | no bits |
//! | `all` | every bit of the word |
//!
//! # Example
//!
//! ```
//! use audit_config::{resolve, ClassToken, LogClass};
//!
//! assert_eq!(
//!     resolve("Misc"),
//!     ClassToken::Classes(LogClass::MISC | LogClass::MISC_SET)
//! );
//! assert_eq!(resolve("select"), ClassToken::Unrecognized);
//! ```

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Categories of SQL activity that can be enabled for session audit logging.
    ///
    /// Bit positions are stable; hosts may store and compare the raw word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LogClass: u32 {
        /// CREATE, DROP and ALTER of objects
        const DDL      = 1 << 0;
        /// Function calls and DO blocks
        const FUNCTION = 1 << 1;
        /// Statements not covered by another class
        const MISC     = 1 << 2;
        /// SELECT and COPY from a relation
        const READ     = 1 << 3;
        /// GRANT, REVOKE and role management
        const ROLE     = 1 << 4;
        /// INSERT, UPDATE, DELETE and TRUNCATE
        const WRITE    = 1 << 5;
        /// SET statements
        const MISC_SET = 1 << 6;
    }
}

impl LogClass {
    /// Nothing is logged.
    pub const NONE: Self = Self::empty();

    /// Every bit of the word, including bits not yet assigned to a class.
    ///
    /// Differs from [`LogClass::all`], which only covers the declared classes.
    pub const ALL: Self = Self::from_bits_retain(u32::MAX);

    /// Returns true if this value carries every bit outside the declared classes.
    ///
    /// Only values derived from the `all` meta-name do.
    pub fn is_all_based(&self) -> bool {
        let unassigned = Self::ALL.difference(Self::all());
        self.contains(unassigned)
    }
}

/// Meta-names that do not denote a single class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaClass {
    /// `none`: contributes no bits
    None,
    /// `all`: contributes every bit
    All,
}

/// The meaning of one list element after case-insensitive lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassToken {
    /// One or more concrete classes
    Classes(LogClass),
    /// `none` or `all`
    Meta(MetaClass),
    /// Not a recognized name
    Unrecognized,
}

impl ClassToken {
    /// Returns the mask this token contributes when folded into a value.
    ///
    /// Meta-names fold like any other token: `none` is the empty mask and
    /// `all` the full word. Returns `None` for unrecognized names.
    pub fn bits(&self) -> Option<LogClass> {
        match self {
            ClassToken::Classes(classes) => Some(*classes),
            ClassToken::Meta(MetaClass::None) => Some(LogClass::NONE),
            ClassToken::Meta(MetaClass::All) => Some(LogClass::ALL),
            ClassToken::Unrecognized => None,
        }
    }
}

const NAME_TABLE: [(&str, ClassToken); 9] = [
    ("NONE", ClassToken::Meta(MetaClass::None)),
    ("ALL", ClassToken::Meta(MetaClass::All)),
    ("DDL", ClassToken::Classes(LogClass::DDL)),
    ("FUNCTION", ClassToken::Classes(LogClass::FUNCTION)),
    (
        "MISC",
        ClassToken::Classes(LogClass::MISC.union(LogClass::MISC_SET)),
    ),
    ("MISC_SET", ClassToken::Classes(LogClass::MISC_SET)),
    ("READ", ClassToken::Classes(LogClass::READ)),
    ("ROLE", ClassToken::Classes(LogClass::ROLE)),
    ("WRITE", ClassToken::Classes(LogClass::WRITE)),
];

/// Resolves a class name, ignoring ASCII case.
///
/// The negation marker is not part of the name; callers strip it first.
pub fn resolve(token: &str) -> ClassToken {
    NAME_TABLE
        .iter()
        .find(|(name, _)| token.eq_ignore_ascii_case(name))
        .map_or(ClassToken::Unrecognized, |(_, meaning)| *meaning)
}

/// Writes comma-separated list elements.
struct ListWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl<'a, 'b> ListWriter<'a, 'b> {
    fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self { f, first: true }
    }

    fn push(&mut self, name: &str, subtract: bool) -> fmt::Result {
        if !self.first {
            self.f.write_str(",")?;
        }
        self.first = false;
        if subtract {
            self.f.write_str("-")?;
        }
        self.f.write_str(name)
    }
}

// Classes rendered by their own name, in list order. MISC and MISC_SET are
// handled separately because the `misc` name covers both bits.
const SIMPLE_BEFORE_MISC: [(&str, LogClass); 2] =
    [("ddl", LogClass::DDL), ("function", LogClass::FUNCTION)];
const SIMPLE_AFTER_MISC: [(&str, LogClass); 3] = [
    ("read", LogClass::READ),
    ("role", LogClass::ROLE),
    ("write", LogClass::WRITE),
];

/// Renders the value as a list that validates back to the same value.
///
/// Values built on `all` render as `all` followed by subtractions; other
/// values list their classes. Bits outside the declared classes are only
/// representable through `all`; a value holding some but not all of them
/// renders its declared classes only.
impl fmt::Display for LogClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = ListWriter::new(f);

        if self.is_all_based() {
            list.push("all", false)?;
            let missing = LogClass::all().difference(*self);
            for (name, class) in SIMPLE_BEFORE_MISC {
                if missing.contains(class) {
                    list.push(name, true)?;
                }
            }
            if missing.contains(LogClass::MISC) {
                list.push("misc", true)?;
                if !missing.contains(LogClass::MISC_SET) {
                    list.push("misc_set", false)?;
                }
            } else if missing.contains(LogClass::MISC_SET) {
                list.push("misc_set", true)?;
            }
            for (name, class) in SIMPLE_AFTER_MISC {
                if missing.contains(class) {
                    list.push(name, true)?;
                }
            }
            return Ok(());
        }

        let present = self.intersection(LogClass::all());
        if present.is_empty() {
            return list.push("none", false);
        }
        for (name, class) in SIMPLE_BEFORE_MISC {
            if present.contains(class) {
                list.push(name, false)?;
            }
        }
        if present.contains(LogClass::MISC) {
            list.push("misc", false)?;
            if !present.contains(LogClass::MISC_SET) {
                list.push("misc_set", true)?;
            }
        } else if present.contains(LogClass::MISC_SET) {
            list.push("misc_set", false)?;
        }
        for (name, class) in SIMPLE_AFTER_MISC {
            if present.contains(class) {
                list.push(name, false)?;
            }
        }
        Ok(())
    }
}
