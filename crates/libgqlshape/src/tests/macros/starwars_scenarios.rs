use crate::BuildError;
use crate::NamedType;
use crate::QueryArguments;
use crate::QueryShape;
use crate::build;

type Result<T> = std::result::Result<T, BuildError>;

#[allow(dead_code)]
#[derive(Default, NamedType)]
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

#[derive(Default, QueryArguments)]
struct EpisodeVariable {
    #[graphql("$ep")]
    episode: Episode,
}

#[derive(Default, QueryShape)]
struct DroidFields {
    primary_function: String,
}

#[derive(Default, QueryShape)]
struct EmpireHero {
    graphql_arguments: EpisodeVariable,
    name: String,
}

#[derive(Default, QueryShape)]
struct Hero {
    name: String,
    #[graphql("... on Droid", embed)]
    droid_fields: DroidFields,
    #[graphql("... on Human")]
    height: f64,
    #[graphql("@include(if: $withFriends)")]
    friends: Vec<Character>,
}

#[derive(Default, QueryArguments)]
struct HeroQueryArguments {
    #[graphql("$withFriends,notnull")]
    with_friends: bool,
}

#[derive(Default, QueryShape)]
struct HeroQuery {
    graphql_arguments: HeroQueryArguments,
    #[graphql("aliasof=hero")]
    empire_hero: EmpireHero,
    #[graphql("(episode: $ep)")]
    hero: Hero,
}

#[test]
fn complete_hero_query() -> Result<()> {
    let query = build(&HeroQuery::default())?;

    assert_eq!(query, "\
query($ep: Episode, $withFriends: Boolean!) {
  empireHero: hero(episode: $ep) {
    name
  }
  hero(episode: $ep) {
    name
    ... on Droid {
      primaryFunction
    }
    ... on Human {
      height
    }
    friends @include(if: $withFriends) {
      name
    }
  }
}");
    graphql_parser::parse_query::<String>(&query)
        .expect("rendered document should parse");
    Ok(())
}

#[test]
fn nested_selection_without_metadata() -> Result<()> {
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
fn list_selection_with_literal_argument() -> Result<()> {
    #[derive(Default, QueryArguments)]
    struct HumanArguments {
        #[graphql("\"1000\"")]
        id: String,
    }

    #[derive(Default, QueryShape)]
    struct Human {
        graphql_arguments: HumanArguments,
        name: String,
        height: i32,
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
fn aliased_siblings_with_distinct_literals() -> Result<()> {
    #[derive(Default, QueryArguments)]
    struct EmpireArguments {
        #[graphql("EMPIRE")]
        episode: Episode,
    }

    #[derive(Default, QueryArguments)]
    struct JediArguments {
        #[graphql("JEDI")]
        episode: Episode,
    }

    #[derive(Default, QueryShape)]
    struct Empire {
        graphql_arguments: EmpireArguments,
        name: String,
    }

    #[derive(Default, QueryShape)]
    struct Jedi {
        graphql_arguments: JediArguments,
        name: String,
    }

    #[derive(Default, QueryShape)]
    struct Query {
        #[graphql("alias=hero")]
        empire_hero: Empire,
        #[graphql("alias=hero")]
        jedi_hero: Jedi,
    }

    let query = build(&Query::default())?;
    assert_eq!(query, "\
query {
  empireHero: hero(episode: EMPIRE) {
    name
  }
  jediHero: hero(episode: JEDI) {
    name
  }
}");
    graphql_parser::parse_query::<String>(&query)
        .expect("rendered document should parse");
    Ok(())
}

#[test]
fn operation_variable_bound_by_a_selection() -> Result<()> {
    #[derive(Default, QueryArguments)]
    struct OperationArguments {
        #[graphql("$ep,notnull")]
        episode: Episode,
    }

    #[derive(Default, QueryShape)]
    struct Query {
        graphql_arguments: OperationArguments,
        hero: EmpireHero,
    }

    assert_eq!(build(&Query::default())?, "\
query($ep: Episode!) {
  hero(episode: $ep) {
    name
  }
}");
    Ok(())
}
