//! `#[derive(Ddl)]` end to end through the public builder API.

#![cfg(feature = "derive")]
#![allow(dead_code)]

use snowddl::{
    AccountObjectIdentifier, Ddl, DdlValue, FieldValue, Kind, SchemaObjectIdentifier, SqlBuilder,
};

#[derive(Ddl)]
struct Example {
    #[ddl(static, name = "EXAMPLE_STATIC")]
    r#static: (),
    #[ddl(keyword, name = "EXAMPLE_KEYWORD")]
    flag: Option<bool>,
    #[ddl(identifier)]
    name: AccountObjectIdentifier,
    #[ddl(command, double_quotes, name = "EXAMPLE_COMMAND")]
    command: Option<String>,
    #[ddl(parameter, name = "EXAMPLE_PARAMETER")]
    parameter: Option<i32>,
    // not registered
    note: String,
}

fn example() -> Example {
    Example {
        r#static: (),
        flag: None,
        name: AccountObjectIdentifier::new("thing"),
        command: None,
        parameter: None,
        note: "ignored".into(),
    }
}

#[test]
fn unset_fields_render_nothing() {
    let sql = SqlBuilder::new().build(&example()).unwrap();
    assert_eq!(sql, r#"EXAMPLE_STATIC "thing""#);
}

#[test]
fn fields_render_in_declaration_order() {
    let mut e = example();
    e.flag = Some(true);
    e.command = Some("example".into());
    e.parameter = Some(1);
    let sql = SqlBuilder::new().build(&e).unwrap();
    assert_eq!(
        sql,
        r#"EXAMPLE_STATIC EXAMPLE_KEYWORD "thing" EXAMPLE_COMMAND "example" EXAMPLE_PARAMETER = 1"#
    );
}

#[test]
fn false_keyword_renders_nothing() {
    let mut e = example();
    e.flag = Some(false);
    assert_eq!(
        SqlBuilder::new().build(&e).unwrap(),
        r#"EXAMPLE_STATIC "thing""#
    );
}

#[test]
fn unannotated_fields_are_not_registered() {
    let e = example();
    let names: Vec<_> = e.ddl_fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["static", "flag", "name", "command", "parameter"]);
    assert_eq!(
        e.ddl_fields()[0].directive.map(|d| d.kind),
        Some(Kind::Static)
    );
}

#[derive(Ddl)]
struct Pair {
    #[ddl(parameter, single_quotes, name = "KEY")]
    key: String,
    #[ddl(parameter, single_quotes, name = "KEY2")]
    key2: String,
}

#[derive(Ddl)]
struct Tagged {
    #[ddl(list, name = "TAG")]
    tags: Vec<Pair>,
    #[ddl(list, no_parentheses)]
    bare: Option<Vec<Pair>>,
}

fn pair(a: &str, b: &str) -> Pair {
    Pair {
        key: a.into(),
        key2: b.into(),
    }
}

#[test]
fn list_with_and_without_parentheses() {
    let t = Tagged {
        tags: vec![pair("abc", "def"), pair("123", "456")],
        bare: Some(vec![pair("x", "y")]),
    };
    assert_eq!(
        SqlBuilder::new().build(&t).unwrap(),
        "TAG (KEY = 'abc' KEY2 = 'def',KEY = '123' KEY2 = '456') KEY = 'x' KEY2 = 'y'"
    );
}

#[test]
fn empty_list_renders_nothing() {
    let t = Tagged {
        tags: Vec::new(),
        bare: None,
    };
    assert_eq!(SqlBuilder::new().build(&t).unwrap(), "");
}

#[derive(Default, Ddl)]
struct Props {
    #[ddl(parameter, name = "A")]
    a: Option<u32>,
    #[ddl(parameter, single_quotes, name = "B")]
    b: Option<String>,
}

#[derive(Ddl)]
struct Outer {
    #[ddl(static, name = "ALTER THING")]
    alter: (),
    #[ddl(keyword, name = "SET")]
    set: Option<Props>,
    #[ddl(keyword, parentheses, name = "WITH")]
    with: Option<Props>,
    #[ddl(parameter, name = "INNER")]
    inner: Option<Props>,
}

#[test]
fn nested_structs() {
    let outer = Outer {
        alter: (),
        set: Some(Props {
            a: Some(1),
            b: Some("x".into()),
        }),
        with: Some(Props {
            a: Some(2),
            b: None,
        }),
        inner: Some(Props {
            a: None,
            b: Some("y".into()),
        }),
    };
    assert_eq!(
        SqlBuilder::new().build(&outer).unwrap(),
        "ALTER THING SET A = 1 B = 'x' WITH (A = 2) INNER = B = 'y'"
    );
}

#[test]
fn empty_nested_struct_renders_nothing() {
    let outer = Outer {
        alter: (),
        set: Some(Props::default()),
        with: Some(Props::default()),
        inner: Some(Props::default()),
    };
    assert_eq!(SqlBuilder::new().build(&outer).unwrap(), "ALTER THING");
}

#[derive(Ddl)]
struct Generic<T: DdlValue> {
    #[ddl(keyword)]
    value: T,
}

#[test]
fn generic_structs_derive() {
    let g = Generic { value: 42u8 };
    assert_eq!(SqlBuilder::new().build(&g).unwrap(), "42");
    assert!(matches!(g.ddl_value(), FieldValue::Struct(_)));
}

#[derive(Ddl)]
struct BadIdentifier {
    #[ddl(identifier)]
    name: u32,
}

#[test]
fn kind_value_mismatch_is_malformed() {
    let err = SqlBuilder::new()
        .build(&BadIdentifier { name: 1 })
        .unwrap_err();
    assert!(err.is_malformed_directive());
    assert!(err.to_string().contains("'name'"));
}

#[derive(Ddl)]
struct Qualified {
    #[ddl(static, name = "DROP TABLE")]
    drop: (),
    #[ddl(identifier)]
    table: SchemaObjectIdentifier,
}

#[test]
fn parsed_identifier_renders_fully_qualified() {
    let q = Qualified {
        drop: (),
        table: r#"analytics."My Schema".events"#.parse().unwrap(),
    };
    assert_eq!(
        SqlBuilder::new().build(&q).unwrap(),
        r#"DROP TABLE "analytics"."My Schema"."events""#
    );
}
