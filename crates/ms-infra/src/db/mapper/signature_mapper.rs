use crate::db::models::{NewSignatureRow, SignatureRow};
use ms_core::Signature;

/// The row identity is the signature's position in the written batch.
impl<'a> From<(usize, &'a Signature)> for NewSignatureRow<'a> {
    fn from((index, signature): (usize, &'a Signature)) -> Self {
        NewSignatureRow {
            id: index as i32,
            name: &signature.name,
            html: &signature.html,
        }
    }
}

impl From<SignatureRow> for Signature {
    fn from(row: SignatureRow) -> Self {
        Signature {
            name: row.name,
            html: row.html,
        }
    }
}
