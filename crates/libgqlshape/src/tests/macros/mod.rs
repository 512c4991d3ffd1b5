mod derive_named_type;
mod derive_query_shape;
mod starwars_scenarios;
