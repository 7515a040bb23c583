//! `ALTER TABLE ... ADD CONSTRAINT` / `DROP CONSTRAINT`

use super::Statement;
use crate::Ddl;
use crate::error::{DdlError, DdlResult};
use crate::ident::{SchemaObjectIdentifier, UnqualifiedIdentifier};

sql_token_enum! {
    pub enum ConstraintType {
        Unique => "UNIQUE",
        PrimaryKey => "PRIMARY KEY",
        ForeignKey => "FOREIGN KEY",
    }
}

sql_token_enum! {
    pub enum Enforcement {
        Enforced => "ENFORCED",
        NotEnforced => "NOT ENFORCED",
    }
}

sql_token_enum! {
    pub enum Deferrability {
        Deferrable => "DEFERRABLE",
        NotDeferrable => "NOT DEFERRABLE",
    }
}

sql_token_enum! {
    pub enum InitialConstraintMode {
        Deferred => "INITIALLY DEFERRED",
        Immediate => "INITIALLY IMMEDIATE",
    }
}

/// One column in a constraint column list.
#[derive(Debug, Clone, PartialEq, Eq, Ddl)]
pub struct Column {
    #[ddl(identifier)]
    pub name: UnqualifiedIdentifier,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: UnqualifiedIdentifier::new(name),
        }
    }
}

fn columns<I, S>(names: I) -> Vec<Column>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Column::new).collect()
}

/// `<table> (<cols>)` after `REFERENCES`.
#[derive(Debug, Clone, Ddl)]
pub struct ForeignKeyReference {
    #[ddl(identifier)]
    pub table: SchemaObjectIdentifier,
    #[ddl(list)]
    pub columns: Vec<Column>,
}

impl ForeignKeyReference {
    pub fn new<I, S>(table: SchemaObjectIdentifier, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table,
            columns: columns(names),
        }
    }
}

#[derive(Debug, Clone, Ddl)]
pub struct AddTableConstraintOptions {
    #[ddl(static, name = "ALTER TABLE")]
    alter: (),
    #[ddl(identifier)]
    pub table: SchemaObjectIdentifier,
    #[ddl(static, name = "ADD CONSTRAINT")]
    add: (),
    #[ddl(identifier)]
    pub name: UnqualifiedIdentifier,
    #[ddl(keyword)]
    pub constraint_type: ConstraintType,
    #[ddl(list)]
    pub columns: Vec<Column>,
    #[ddl(keyword, name = "REFERENCES")]
    pub references: Option<ForeignKeyReference>,
    #[ddl(keyword)]
    pub enforcement: Option<Enforcement>,
    #[ddl(keyword)]
    pub deferrability: Option<Deferrability>,
    #[ddl(keyword)]
    pub initially: Option<InitialConstraintMode>,
    #[ddl(parameter, single_quotes, name = "COMMENT")]
    pub comment: Option<String>,
}

impl AddTableConstraintOptions {
    pub fn new<I, S>(
        table: SchemaObjectIdentifier,
        name: impl Into<String>,
        constraint_type: ConstraintType,
        column_names: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            alter: (),
            table,
            add: (),
            name: UnqualifiedIdentifier::new(name),
            constraint_type,
            columns: columns(column_names),
            references: None,
            enforcement: None,
            deferrability: None,
            initially: None,
            comment: None,
        }
    }
}

impl Statement for AddTableConstraintOptions {
    fn validate(&self) -> DdlResult<()> {
        if self.name.name().is_empty() {
            return Err(DdlError::validation("ADD CONSTRAINT: name must not be empty"));
        }
        if self.columns.is_empty() {
            return Err(DdlError::validation(
                "ADD CONSTRAINT: at least one column is required",
            ));
        }
        let all_columns = self
            .columns
            .iter()
            .chain(self.references.iter().flat_map(|r| &r.columns));
        for column in all_columns {
            if column.name.name().is_empty() {
                return Err(DdlError::validation(
                    "ADD CONSTRAINT: column names must not be empty",
                ));
            }
        }
        match (self.constraint_type, &self.references) {
            (ConstraintType::ForeignKey, None) => Err(DdlError::validation(
                "ADD CONSTRAINT: FOREIGN KEY requires REFERENCES",
            )),
            (ConstraintType::ForeignKey, Some(refs)) if refs.columns.len() != self.columns.len() => {
                Err(DdlError::validation(format!(
                    "ADD CONSTRAINT: FOREIGN KEY has {} column(s) but REFERENCES has {}",
                    self.columns.len(),
                    refs.columns.len()
                )))
            }
            (ConstraintType::ForeignKey, Some(_)) => Ok(()),
            (other, Some(_)) => Err(DdlError::validation(format!(
                "ADD CONSTRAINT: REFERENCES is only valid for FOREIGN KEY, not {other}"
            ))),
            (_, None) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Ddl)]
pub struct DropTableConstraintOptions {
    #[ddl(static, name = "ALTER TABLE")]
    alter: (),
    #[ddl(identifier)]
    pub table: SchemaObjectIdentifier,
    #[ddl(static, name = "DROP CONSTRAINT")]
    drop: (),
    #[ddl(identifier)]
    pub name: UnqualifiedIdentifier,
    #[ddl(keyword, name = "CASCADE")]
    pub cascade: Option<bool>,
}

impl DropTableConstraintOptions {
    pub fn new(table: SchemaObjectIdentifier, name: impl Into<String>) -> Self {
        Self {
            alter: (),
            table,
            drop: (),
            name: UnqualifiedIdentifier::new(name),
            cascade: None,
        }
    }
}

impl Statement for DropTableConstraintOptions {
    fn validate(&self) -> DdlResult<()> {
        if self.name.name().is_empty() {
            return Err(DdlError::validation("DROP CONSTRAINT: name must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders() -> SchemaObjectIdentifier {
        SchemaObjectIdentifier::new("DB", "PUBLIC", "ORDERS")
    }

    #[test]
    fn add_unique_constraint() {
        let mut opts =
            AddTableConstraintOptions::new(orders(), "uq_ref", ConstraintType::Unique, ["ref", "region"]);
        opts.enforcement = Some(Enforcement::Enforced);
        opts.deferrability = Some(Deferrability::NotDeferrable);
        opts.initially = Some(InitialConstraintMode::Immediate);
        opts.comment = Some("hello unique".into());

        assert_eq!(
            opts.to_sql().unwrap(),
            concat!(
                r#"ALTER TABLE "DB"."PUBLIC"."ORDERS" ADD CONSTRAINT "uq_ref" UNIQUE ("ref","region") "#,
                "ENFORCED NOT DEFERRABLE INITIALLY IMMEDIATE COMMENT = 'hello unique'"
            )
        );
    }

    #[test]
    fn add_foreign_key_constraint() {
        let mut opts = AddTableConstraintOptions::new(
            orders(),
            "fk_customer",
            ConstraintType::ForeignKey,
            ["customer_id"],
        );
        opts.references = Some(ForeignKeyReference::new(
            SchemaObjectIdentifier::new("DB", "PUBLIC", "CUSTOMERS"),
            ["id"],
        ));
        opts.enforcement = Some(Enforcement::NotEnforced);

        assert_eq!(
            opts.to_sql().unwrap(),
            concat!(
                r#"ALTER TABLE "DB"."PUBLIC"."ORDERS" ADD CONSTRAINT "fk_customer" FOREIGN KEY ("customer_id") "#,
                r#"REFERENCES "DB"."PUBLIC"."CUSTOMERS" ("id") NOT ENFORCED"#
            )
        );
    }

    #[test]
    fn foreign_key_requires_matching_references() {
        let opts =
            AddTableConstraintOptions::new(orders(), "fk", ConstraintType::ForeignKey, ["a"]);
        assert!(opts.to_sql().unwrap_err().is_validation());

        let mut opts =
            AddTableConstraintOptions::new(orders(), "fk", ConstraintType::ForeignKey, ["a", "b"]);
        opts.references = Some(ForeignKeyReference::new(orders(), ["x"]));
        assert!(opts.validate().unwrap_err().is_validation());
    }

    #[test]
    fn references_forbidden_without_foreign_key() {
        let mut opts =
            AddTableConstraintOptions::new(orders(), "pk", ConstraintType::PrimaryKey, ["id"]);
        opts.references = Some(ForeignKeyReference::new(orders(), ["id"]));
        let err = opts.validate().unwrap_err();
        assert!(err.to_string().contains("not PRIMARY KEY"));
    }

    #[test]
    fn constraint_needs_columns() {
        let opts = AddTableConstraintOptions::new(
            orders(),
            "pk",
            ConstraintType::PrimaryKey,
            Vec::<String>::new(),
        );
        assert!(opts.validate().unwrap_err().is_validation());
    }

    #[test]
    fn names_and_comments_with_quotes_are_escaped() {
        let mut opts = AddTableConstraintOptions::new(
            orders(),
            r#"uq"x"#,
            ConstraintType::Unique,
            [r#"a"b"#],
        );
        opts.comment = Some("it's unique".into());
        assert_eq!(
            opts.to_sql().unwrap(),
            concat!(
                r#"ALTER TABLE "DB"."PUBLIC"."ORDERS" ADD CONSTRAINT "uq""x" UNIQUE ("a""b") "#,
                "COMMENT = 'it''s unique'"
            )
        );
    }

    #[test]
    fn empty_column_name_is_rejected() {
        let opts =
            AddTableConstraintOptions::new(orders(), "uq", ConstraintType::Unique, ["id", ""]);
        assert!(opts.validate().unwrap_err().is_validation());
    }

    #[test]
    fn drop_constraint() {
        let mut opts = DropTableConstraintOptions::new(orders(), "fk_customer");
        opts.cascade = Some(true);
        assert_eq!(
            opts.to_sql().unwrap(),
            r#"ALTER TABLE "DB"."PUBLIC"."ORDERS" DROP CONSTRAINT "fk_customer" CASCADE"#
        );
    }
}
