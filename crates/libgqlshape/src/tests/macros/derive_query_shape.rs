use crate::BuildError;
use crate::NamedType;
use crate::QueryArguments;
use crate::QueryBuilder;
use crate::QueryShape;
use crate::build;
use crate::document::OperationKind;
use crate::render::RenderError;
use crate::shape::FieldValue;
use crate::shape::QueryShape as _;
use crate::shape::ValueType;

type Result<T> = std::result::Result<T, BuildError>;

#[derive(Clone, Copy, Default, NamedType)]
enum Episode {
    #[default]
    NewHope,
    Empire,
    Jedi,
}

#[derive(Default, QueryShape)]
struct Character {
    name: String,
}

#[test]
fn simple() -> Result<()> {
    #[derive(Default, QueryShape)]
    struct Query {
        hero: Character,
    }

    assert_eq!(build(&Query::default())?, "\
query {
  hero {
    name
  }
}");
    Ok(())
}

#[test]
fn literal_arguments() -> Result<()> {
    #[derive(Default, QueryArguments)]
    struct HumanArguments {
        #[graphql("\"1000\"")]
        id: String,
    }

    #[derive(Default, QueryShape)]
    struct Human {
        graphql_arguments: HumanArguments,
        name: String,
        height: f64,
    }

    #[derive(Default, QueryShape)]
    struct Query {
        human: Vec<Human>,
    }

    assert_eq!(build(&Query::default())?, "\
query {
  human(id: \"1000\") {
    name
    height
  }
}");
    Ok(())
}

#[test]
fn verbatim_arguments() -> Result<()> {
    #[derive(Default, QueryShape)]
    struct Human {
        name: String,
        height: f64,
    }

    #[derive(Default, QueryShape)]
    struct Query {
        #[graphql("(id: \"1000\")")]
        human: Vec<Human>,
    }

    assert_eq!(build(&Query::default())?, "\
query {
  human(id: \"1000\") {
    name
    height
  }
}");
    Ok(())
}

#[test]
fn arguments_on_scalar_fields() -> Result<()> {
    #[derive(Default, QueryArguments)]
    struct HumanArguments {
        #[graphql("\"1000\"")]
        id: String,
    }

    #[derive(Default, QueryShape)]
    struct Human {
        graphql_arguments: HumanArguments,
        name: String,
        #[graphql("(unit: FOOT)")]
        height: f64,
    }

    #[derive(Default, QueryShape)]
    struct Query {
        human: Human,
    }

    assert_eq!(build(&Query::default())?, "\
query {
  human(id: \"1000\") {
    name
    height(unit: FOOT)
  }
}");
    Ok(())
}

#[test]
fn argument_values_come_from_the_instance() -> Result<()> {
    #[derive(Default, QueryArguments)]
    struct HumanArguments {
        id: String,
        first: Option<i32>,
        after: Option<String>,
    }

    #[derive(Default, QueryShape)]
    struct Human {
        graphql_arguments: HumanArguments,
        name: String,
    }

    #[derive(Default, QueryShape)]
    struct Query {
        human: Option<Human>,
    }

    let query = Query {
        human: Some(Human {
            graphql_arguments: HumanArguments {
                id: "1000".to_string(),
                first: Some(10),
                after: None,
            },
            name: String::new(),
        }),
    };

    assert_eq!(build(&query)?, "\
query {
  human(after: null, first: 10, id: \"1000\") {
    name
  }
}");

    // An absent optional selects through a zero value.
    assert_eq!(build(&Query::default())?, "\
query {
  human(after: null, first: null, id: \"\") {
    name
  }
}");
    Ok(())
}

#[test]
fn list_elements_use_zero_values() -> Result<()> {
    #[derive(Default, QueryArguments)]
    struct HumanArguments {
        first: i32,
    }

    #[derive(Default, QueryShape)]
    struct Human {
        graphql_arguments: HumanArguments,
        name: String,
    }

    #[derive(Default, QueryShape)]
    struct Query {
        human: Vec<Human>,
    }

    let query = Query {
        human: vec![Human {
            graphql_arguments: HumanArguments { first: 5 },
            name: String::new(),
        }],
    };

    assert_eq!(build(&query)?, "\
query {
  human(first: 0) {
    name
  }
}");
    Ok(())
}

#[test]
fn aliases() -> Result<()> {
    #[derive(Default, QueryArguments)]
    struct HeroArguments {
        episode: Episode,
    }

    #[derive(Default, QueryShape)]
    struct Hero {
        graphql_arguments: HeroArguments,
        name: String,
    }

    #[derive(Default, QueryShape)]
    struct Query {
        #[graphql("alias=hero")]
        empire_hero: Hero,
        #[graphql("aliasof=hero")]
        jedi_hero: Hero,
    }

    let query = Query {
        empire_hero: Hero {
            graphql_arguments: HeroArguments { episode: Episode::Empire },
            name: String::new(),
        },
        jedi_hero: Hero {
            graphql_arguments: HeroArguments { episode: Episode::Jedi },
            name: String::new(),
        },
    };

    assert_eq!(build(&query)?, "\
query {
  empireHero: hero(episode: EMPIRE) {
    name
  }
  jediHero: hero(episode: JEDI) {
    name
  }
}");
    Ok(())
}

#[test]
fn variables() -> Result<()> {
    #[derive(Default, QueryArguments)]
    struct HeroArguments {
        #[graphql("$episode")]
        episode: Episode,
    }

    #[derive(Default, QueryShape)]
    struct Hero {
        graphql_arguments: HeroArguments,
        friends: Vec<Character>,
    }

    #[derive(Default, QueryShape)]
    struct Query {
        hero: Hero,
    }

    assert_eq!(build(&Query::default())?, "\
query($episode: Episode) {
  hero(episode: $episode) {
    friends {
      name
    }
  }
}");
    Ok(())
}

#[test]
fn inline_fragments() -> Result<()> {
    #[derive(Default, QueryArguments)]
    struct QueryArgs {
        #[graphql("$ep,notnull")]
        episode: Episode,
    }

    #[derive(Default, QueryShape)]
    struct DroidFields {
        primary_function: String,
    }

    #[derive(Default, QueryShape)]
    struct Hero {
        name: String,
        #[graphql("... on Human")]
        height: i32,
        #[graphql("... on Droid", embed)]
        droid_fields: DroidFields,
    }

    #[derive(Default, QueryShape)]
    struct Query {
        graphql_arguments: QueryArgs,
        #[graphql("(episode: $ep)")]
        hero: Hero,
    }

    assert_eq!(build(&Query::default())?, "\
query($ep: Episode!) {
  hero(episode: $ep) {
    name
    ... on Human {
      height
    }
    ... on Droid {
      primaryFunction
    }
  }
}");
    Ok(())
}

#[test]
fn directives() -> Result<()> {
    #[derive(Default, QueryArguments)]
    struct QueryArgs {
        #[graphql("$withFriends")]
        with_friends: bool,
    }

    #[derive(Default, QueryShape)]
    struct Hero {
        name: String,
        #[graphql("@include(if: $withFriends)")]
        friends: Vec<Character>,
    }

    #[derive(Default, QueryShape)]
    struct Query {
        graphql_arguments: QueryArgs,
        hero: Hero,
    }

    assert_eq!(build(&Query::default())?, "\
query($withFriends: Boolean) {
  hero {
    name
    friends @include(if: $withFriends) {
      name
    }
  }
}");
    Ok(())
}

#[test]
fn pointers() -> Result<()> {
    #[derive(Default, QueryArguments)]
    struct EmpireArguments {
        #[graphql("EMPIRE")]
        episode: Episode,
    }

    #[derive(Default, QueryShape)]
    struct EmpireHero {
        graphql_arguments: EmpireArguments,
        name: String,
    }

    #[derive(Default, QueryShape)]
    struct Query {
        #[graphql("alias=hero")]
        empire_hero: Option<Box<EmpireHero>>,
        #[graphql("alias=hero,(episode: JEDI)")]
        jedi_hero: Option<Box<Character>>,
    }

    assert_eq!(build(&Query::default())?, "\
query {
  empireHero: hero(episode: EMPIRE) {
    name
  }
  jediHero: hero(episode: JEDI) {
    name
  }
}");
    Ok(())
}

#[test]
fn serde_rename() -> Result<()> {
    #[derive(Default, QueryShape)]
    struct Query {
        #[serde(rename = "hero")]
        hero_object: Character,
    }

    assert_eq!(build(&Query::default())?, "\
query {
  hero {
    name
  }
}");
    Ok(())
}

#[test]
fn graphql_rename_and_raw_identifiers() -> Result<()> {
    #[derive(Default, QueryShape)]
    struct Node {
        r#type: String,
        #[graphql(rename = "__typename")]
        typename: String,
    }

    #[derive(Default, QueryShape)]
    struct Query {
        node: Node,
    }

    assert_eq!(build(&Query::default())?, "\
query {
  node {
    type
    __typename
  }
}");
    Ok(())
}

#[test]
fn mutation_with_operation_name() -> Result<()> {
    #[derive(Default, QueryArguments)]
    struct ReviewArguments {
        #[graphql("$ep,notnull")]
        episode: Episode,
        #[graphql("$stars,notnull")]
        stars: i32,
    }

    #[derive(Default, QueryShape)]
    struct Review {
        graphql_arguments: ReviewArguments,
        stars: i32,
        commentary: Option<String>,
    }

    #[derive(Default, QueryShape)]
    struct CreateReview {
        create_review: Review,
    }

    let mutation =
        QueryBuilder::new()
            .set_operation_kind(OperationKind::Mutation)
            .set_operation_name(Some("CreateReviewForEpisode".to_string()))
            .build(&CreateReview::default())?;

    assert_eq!(mutation, "\
mutation CreateReviewForEpisode($ep: Episode!, $stars: Int!) {
  createReview(episode: $ep, stars: $stars) {
    stars
    commentary
  }
}");
    graphql_parser::parse_query::<String>(&mutation)
        .expect("rendered document should parse");
    Ok(())
}

#[test]
fn input_object_variables_use_the_record_name() -> Result<()> {
    #[derive(Default, QueryShape)]
    struct ReviewInput {
        stars: i32,
        commentary: Option<String>,
    }

    #[derive(Default, QueryArguments)]
    struct ReviewArguments {
        #[graphql("$ep,notnull")]
        episode: Episode,
        #[graphql("$review,notnull")]
        review: ReviewInput,
    }

    #[derive(Default, QueryShape)]
    struct Review {
        graphql_arguments: ReviewArguments,
        stars: i32,
    }

    #[derive(Default, QueryShape)]
    struct CreateReview {
        create_review: Review,
    }

    let mutation =
        QueryBuilder::new()
            .set_operation_kind(OperationKind::Mutation)
            .build(&CreateReview::default())?;

    assert_eq!(mutation, "\
mutation($ep: Episode!, $review: ReviewInput!) {
  createReview(episode: $ep, review: $review) {
    stars
  }
}");
    graphql_parser::parse_query::<String>(&mutation)
        .expect("rendered document should parse");
    Ok(())
}

#[test]
fn unsigned_variables_have_no_type_name() {
    #[derive(Default, QueryArguments)]
    struct HeroArguments {
        #[graphql("$count")]
        count: u32,
    }

    #[derive(Default, QueryShape)]
    struct Hero {
        graphql_arguments: HeroArguments,
        name: String,
    }

    #[derive(Default, QueryShape)]
    struct Query {
        hero: Hero,
    }

    let err = build(&Query::default()).unwrap_err();
    assert!(matches!(
        err,
        BuildError::Render(RenderError::VariableType { ref argument_name, ref path, .. })
            if argument_name == "count" && path == "hero"
    ));
}

#[test]
fn derived_shapes_are_described_once() {
    #[derive(Default, QueryShape)]
    struct Query {
        #[graphql("@skip(if: $skip)")]
        hero: Character,
    }

    let shape = Query::record_shape();
    assert!(std::ptr::eq(shape, Query::record_shape()));
    assert_eq!(shape.type_name(), "Query");

    let hero = shape.field(0).unwrap();
    assert_eq!(hero.ident(), "hero");
    assert_eq!(hero.metadata(), "@skip(if: $skip)");
    assert_eq!(hero.directives().directive(), Some("@skip(if: $skip)"));
    assert!(matches!(hero.value_type(), ValueType::Record(_)));

    let value = Query::default().record_value();
    assert!(matches!(value.field(0), FieldValue::Record(_)));
}
