use crate::BuildError;
use crate::NamedType;
use crate::QueryArguments;
use crate::QueryShape;
use crate::build;
use crate::shape::ArgumentLiteral;
use crate::shape::ShapeField;
use crate::shape::ValueType;

#[derive(Default, NamedType)]
enum Episode {
    #[default]
    NewHope,
    #[graphql(rename = "EMPIRE_STRIKES_BACK")]
    Empire,
    Jedi,
}

#[derive(Default, NamedType)]
struct Cursor(String);

#[derive(NamedType)]
#[graphql(name = "DateTime")]
struct Timestamp(i64);

#[derive(NamedType)]
#[graphql(name = "lengthUnit")]
enum LengthUnit {
    Foot,
    Meter,
}

#[test]
fn enums_are_named_string_types() {
    assert_eq!(
        Episode::value_type(),
        ValueType::named("Episode", ValueType::String),
    );
    assert_eq!(Episode::value_type().type_name().unwrap(), "Episode");
}

#[test]
fn enum_literals_are_bare_identifiers() {
    assert_eq!(Episode::NewHope.to_argument_literal(), "NEW_HOPE");
    assert_eq!(Episode::Empire.to_argument_literal(), "EMPIRE_STRIKES_BACK");
    assert_eq!(Episode::Jedi.to_argument_literal(), "JEDI");
    assert_eq!(Some(Episode::Jedi).to_argument_literal(), "JEDI");
    assert_eq!(
        vec![Episode::NewHope, Episode::Jedi].to_argument_literal(),
        "[NEW_HOPE, JEDI]",
    );
}

#[test]
fn newtypes_wrap_their_inner_type() {
    assert_eq!(
        Cursor::value_type(),
        ValueType::named("Cursor", ValueType::String),
    );
    assert_eq!(
        Cursor("opaque\"cursor".to_string()).to_argument_literal(),
        r#""opaque\"cursor""#,
    );

    assert_eq!(
        Timestamp::value_type(),
        ValueType::named("DateTime", ValueType::Int),
    );
    assert_eq!(Timestamp(1_700_000_000).to_argument_literal(), "1700000000");
}

#[test]
fn lower_case_type_names_resolve_by_kind() {
    assert_eq!(LengthUnit::value_type().type_name().unwrap(), "String");
    assert_eq!(LengthUnit::Foot.to_argument_literal(), "FOOT");
    assert_eq!(LengthUnit::Meter.to_argument_literal(), "METER");
}

#[test]
fn named_types_as_arguments() -> Result<(), BuildError> {
    #[derive(Default, QueryArguments)]
    struct FriendsArguments {
        #[graphql("$after")]
        after: Cursor,
        episode: Episode,
    }

    #[derive(Default, QueryShape)]
    struct Friend {
        name: String,
    }

    #[derive(Default, QueryShape)]
    struct Friends {
        graphql_arguments: FriendsArguments,
        edges: Vec<Friend>,
    }

    #[derive(Default, QueryShape)]
    struct Query {
        friends: Friends,
    }

    assert_eq!(build(&Query::default())?, "\
query($after: Cursor) {
  friends(after: $after, episode: NEW_HOPE) {
    edges {
      name
    }
  }
}");
    Ok(())
}
