use smallvec::SmallVec;

const ALIAS_KEYS: [&str; 2] = ["aliasof=", "alias="];
const NOT_NULL_KEYWORD: &str = "notnull";

/// Splits a raw field metadata string into its comma-separated tokens.
///
/// A token that opens a parenthesized group (`(episode: $ep`) absorbs the
/// tokens that follow it until one of them closes the group, so
/// `"(episode: $ep, first: 10),@skip(if: $s)"` yields two tokens rather than
/// three. Empty tokens never close a group. A group that is never closed is
/// left exactly as it was split.
///
/// Joining the returned tokens with `,` always reproduces `raw`.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tokens: Vec<String> = raw.split(',').map(str::to_owned).collect();

    let mut i = 0;
    while i < tokens.len() {
        let opens_group =
            tokens[i].starts_with('(')
                && !tokens[i].ends_with(')');

        if opens_group {
            let closer =
                tokens[i + 1..]
                    .iter()
                    .position(|token| !token.is_empty() && token.ends_with(')'));

            if let Some(offset) = closer {
                let absorbed: Vec<String> =
                    tokens.drain(i + 1..=i + 1 + offset).collect();
                for token in absorbed {
                    tokens[i].push(',');
                    tokens[i].push_str(&token);
                }
            }
        }

        i += 1;
    }

    tokens
}

/// One decoded token of a field's metadata string.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldDirective {
    /// `alias=name` or `aliasof=name`: the field is emitted as
    /// `fieldName: name`.
    Alias(String),

    /// `(arg: value, ...)`: an argument list spliced verbatim after the
    /// field name.
    ArgumentList(String),

    /// `@name(...)`: a directive appended after the arguments.
    Directive(String),

    /// `... on Type`: the field is wrapped in an inline fragment.
    InlineFragment(String),

    /// `notnull` in the second slot: the variable is declared non-null.
    NotNull,

    /// Any other token, typically a literal argument value.
    Value(String),

    /// `$name`: a reference to an operation variable.
    Variable(String),
}
impl FieldDirective {
    fn from_token(slot: usize, token: &str) -> Self {
        let trimmed = token.trim();

        if trimmed.starts_with("...") {
            return Self::InlineFragment(trimmed.to_string());
        }
        if trimmed.starts_with('$') {
            return Self::Variable(trimmed.to_string());
        }
        if trimmed.starts_with('(') {
            return Self::ArgumentList(trimmed.to_string());
        }
        if trimmed.starts_with('@') {
            return Self::Directive(trimmed.to_string());
        }
        for key in ALIAS_KEYS {
            if let Some(underlying_name) = trimmed.strip_prefix(key) {
                return Self::Alias(underlying_name.to_string());
            }
        }
        if slot == 1 && trimmed == NOT_NULL_KEYWORD {
            return Self::NotNull;
        }

        Self::Value(trimmed.to_string())
    }
}

/// The decoded form of a field's metadata string.
///
/// Decoding happens once, when the owning
/// [`FieldDescriptor`](crate::shape::FieldDescriptor) is built; consumers
/// only ever look at the typed [`FieldDirective`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldDirectives {
    directives: SmallVec<[FieldDirective; 4]>,
    tokens: Vec<String>,
}
impl FieldDirectives {
    pub fn parse(raw: &str) -> Self {
        let tokens =
            if raw.is_empty() {
                vec![]
            } else {
                parse_tags(raw)
            };

        let directives =
            tokens.iter()
                .enumerate()
                .filter(|(_, token)| !token.trim().is_empty())
                .map(|(slot, token)| FieldDirective::from_token(slot, token))
                .collect();

        Self {
            directives,
            tokens,
        }
    }

    /// The underlying field name named by an `alias=`/`aliasof=` token.
    pub fn alias_of(&self) -> Option<&str> {
        self.directives.iter().find_map(|directive| match directive {
            FieldDirective::Alias(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// The verbatim `(...)` argument list, if one was given.
    pub fn argument_list(&self) -> Option<&str> {
        self.directives.iter().find_map(|directive| match directive {
            FieldDirective::ArgumentList(args) => Some(args.as_str()),
            _ => None,
        })
    }

    pub fn directive(&self) -> Option<&str> {
        self.directives.iter().find_map(|directive| match directive {
            FieldDirective::Directive(clause) => Some(clause.as_str()),
            _ => None,
        })
    }

    pub fn directives(&self) -> &[FieldDirective] {
        &self.directives
    }

    pub fn inline_fragment(&self) -> Option<&str> {
        self.directives.iter().find_map(|directive| match directive {
            FieldDirective::InlineFragment(marker) => Some(marker.as_str()),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn is_not_null(&self) -> bool {
        self.directives.contains(&FieldDirective::NotNull)
    }

    /// The token in the first positional slot, which is the bound value of
    /// an argument-container sub-field (a literal or a `$variable`).
    pub fn positional_value(&self) -> Option<&str> {
        self.tokens
            .first()
            .map(|token| token.trim())
            .filter(|token| !token.is_empty())
    }

    /// The raw tokens as produced by [`parse_tags`].
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn variable(&self) -> Option<&str> {
        self.directives.iter().find_map(|directive| match directive {
            FieldDirective::Variable(name) => Some(name.as_str()),
            _ => None,
        })
    }
}
