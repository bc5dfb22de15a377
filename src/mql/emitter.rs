//! Low-level MQL code generation: object type definitions and object
//! creation transactions.

use std::io::{self, Write};

/// One feature (field) of an MQL object type definition.
#[derive(Debug, Clone, Copy)]
pub struct FeatureDef {
    pub name: &'static str,
    pub mql_type: &'static str,
    pub from_set: bool,
    pub with_index: bool,
    pub default: Option<&'static str>,
}

impl FeatureDef {
    pub const fn new(name: &'static str, mql_type: &'static str) -> Self {
        FeatureDef {
            name,
            mql_type,
            from_set: false,
            with_index: false,
            default: None,
        }
    }

    pub const fn from_set(name: &'static str, mql_type: &'static str) -> Self {
        FeatureDef {
            from_set: true,
            ..FeatureDef::new(name, mql_type)
        }
    }

    /// `FROM SET WITH INDEX`, used for the searchable string features.
    pub const fn indexed(name: &'static str, mql_type: &'static str) -> Self {
        FeatureDef {
            from_set: true,
            with_index: true,
            ..FeatureDef::new(name, mql_type)
        }
    }

    pub const fn with_default(
        name: &'static str,
        mql_type: &'static str,
        default: &'static str,
    ) -> Self {
        FeatureDef {
            default: Some(default),
            ..FeatureDef::new(name, mql_type)
        }
    }
}

/// An object type the generated MQL script creates instances of.
pub trait MqlObject {
    const OBJECT_TYPE: &'static str;

    /// Writes one `CREATE OBJECT` block for this instance.
    fn emit_object(&self, output: &mut dyn Write) -> io::Result<()>;
}

/// Writes a `CREATE OBJECT TYPE` definition. Words are single-monad
/// objects; books, chapters and verses cover single contiguous ranges.
pub fn define_object_type(
    output: &mut dyn Write,
    object_type: &str,
    single_monad: bool,
    features: &[FeatureDef],
) -> io::Result<()> {
    writeln!(output, "CREATE OBJECT TYPE")?;
    writeln!(output, "IF NOT EXISTS")?;
    writeln!(
        output,
        "{}",
        if single_monad {
            "WITH SINGLE MONAD OBJECTS"
        } else {
            "WITH SINGLE RANGE OBJECTS"
        }
    )?;
    writeln!(output, "HAVING UNIQUE FIRST AND LAST MONADS")?;
    writeln!(output, "[{object_type}")?;

    for feature in features {
        write!(output, "    {} : {}", feature.name, feature.mql_type)?;
        if feature.from_set {
            write!(output, " FROM SET")?;
        }
        if feature.with_index {
            write!(output, " WITH INDEX")?;
        }
        if let Some(default) = feature.default {
            write!(output, " DEFAULT {default}")?;
        }
        writeln!(output, ";")?;
    }

    writeln!(output, "]\nGO\n")
}

/// Writes the object creation transaction for a batch of objects of one
/// type, followed by index creation.
pub fn emit_objects<T: MqlObject>(output: &mut dyn Write, items: &[T]) -> io::Result<()> {
    writeln!(output, "CREATE OBJECTS")?;
    writeln!(output, "WITH OBJECT TYPE[{}]", T::OBJECT_TYPE)?;

    for item in items {
        item.emit_object(output)?;
    }

    writeln!(output, "GO")?;
    writeln!(output, "CREATE INDEXES ON OBJECT TYPE[{}] GO\n", T::OBJECT_TYPE)
}
