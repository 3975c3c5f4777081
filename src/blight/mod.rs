mod bytes;
mod codec;
mod error;
mod file;
mod key;
mod present;
mod record;
mod schema;
mod set;
mod types;
mod view;

/// Byte order selection.
pub use bytes::Endianness;
/// Text <-> binary scalar conversion.
pub use codec::{FALSE_LITERAL, FormatSpec, TRUE_LITERAL, encode, format, parse_bool, parse_double, parse_float, parse_int};
/// Error and result aliases.
pub use error::{BlightError, ErrorKind, Result};
/// Parsed container, reader entry point, and owning file type.
pub use file::{Blight, BlightFile, ReadOptions, read_blight};
/// Field key parser.
pub use key::FieldKey;
/// Presenter configuration and entry points.
pub use present::{PresentOptions, ReportField, ReportSection, blight_to_string, report};
/// Record view types.
pub use record::{Ambient, BlightHeader, LightType, Lobj};
/// On-disk layout tables and constants.
pub use schema::{
	AMBIENT_FIELDS, AMBIENT_SIZE, FieldDef, HEADER_FIELDS, HEADER_MAGIC, HEADER_SIZE, LOBJ_FIELDS, LOBJ_MAGIC, LOBJ_SIZE, MAX_AMBIENTS,
	MAX_LOBJS, NO_AMBIENT, Section,
};
/// Symbolic field addressing and mutation.
pub use set::{FieldAddress, get_field, set_field};
/// Scalar type tags.
pub use types::{ScalarKind, TypeTag};
/// Buffer field views.
pub use view::FieldView;
