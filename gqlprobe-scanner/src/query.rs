use serde::Serialize;

/// Full schema introspection document. `TypeRef` unwraps `ofType` far enough to
/// reach the named type behind `[Type!]!` style wrappers.
pub const INTROSPECTION_QUERY: &str = r#"
query IntrospectionQuery {
  __schema {
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      ...FullType
    }
    directives {
      name
      description
      locations
      args {
        ...InputValue
      }
    }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args {
      ...InputValue
    }
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
  }
  inputFields {
    ...InputValue
  }
  interfaces {
    ...TypeRef
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes {
    ...TypeRef
  }
}

fragment InputValue on __InputValue {
  name
  description
  type { ...TypeRef }
  defaultValue
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
          }
        }
      }
    }
  }
}
"#;

/// GraphQL request envelope. Serialized as the JSON body for POST and as
/// query-string parameters for the GET fallback.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IntrospectionRequest<'a> {
    pub query: &'a str,
}

impl IntrospectionRequest<'static> {
    pub fn introspection() -> Self {
        Self {
            query: INTROSPECTION_QUERY,
        }
    }
}
