//! Person-name rendering.

use crate::model::fullname::FullnameData;
use crate::text::joiner::{join, SPACE_SEPARATOR};

/// Renders the canonical "surname name patronymic" string.
pub fn format_selected(fullname: &FullnameData) -> String {
    join(
        [&fullname.surname, &fullname.name, &fullname.patronymic],
        SPACE_SEPARATOR,
    )
}
