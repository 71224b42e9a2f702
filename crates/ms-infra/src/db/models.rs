use crate::db::schema::signatures;
use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = signatures)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SignatureRow {
    pub id: i32,
    pub name: String,
    pub html: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = signatures)]
pub struct NewSignatureRow<'a> {
    pub id: i32,
    pub name: &'a str,
    pub html: &'a str,
}
