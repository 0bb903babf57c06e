use docindex_core::index::{scoring_profile_name, IndexDefinition, CORS_MAX_AGE_SECS};
use docindex_core::schema::{weighted_fields, Capability, DataType, FieldDescriptor, IndexedDocument, DOCUMENT_FIELDS};
use docindex_core::scoring::{build_scoring_profile, Aggregation};
use docindex_core::{Document, Error};

#[test]
fn document_fields_keep_declaration_order() {
    let names: Vec<&str> = Document::fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["uid", "title", "section", "tags", "content", "date", "url"]);

    let keys: Vec<&str> = DOCUMENT_FIELDS.iter().filter(|f| f.key).map(|f| f.name).collect();
    assert_eq!(keys, ["uid"], "exactly one key field");
}

#[test]
fn capabilities_match_field_roles() {
    let field = |name: &str| DOCUMENT_FIELDS.iter().find(|f| f.name == name).expect("field");

    assert!(!field("url").has(Capability::Searchable));
    assert!(field("url").has(Capability::Retrievable));
    assert!(field("tags").has(Capability::Facetable));
    assert_eq!(field("tags").data_type, DataType::StringCollection);
    assert_eq!(field("date").data_type, DataType::DateTimeOffset);
    assert!(field("date").weight.is_none());
    assert!(field("section").has(Capability::Filterable) && field("section").has(Capability::Sortable));
}

#[test]
fn scoring_profile_contains_exactly_weighted_fields() {
    let profile = build_scoring_profile(DOCUMENT_FIELDS, "docs-scoring").expect("profile");

    assert_eq!(profile.name, "docs-scoring");
    assert_eq!(profile.aggregation, Aggregation::Sum);
    let weights: Vec<(&str, f64)> = profile.text_weights.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(weights, [("content", 1.0), ("section", 8.0), ("tags", 9.0), ("title", 10.0)]);
    assert_eq!(profile.text_weights.len(), weighted_fields(DOCUMENT_FIELDS).len());
    for unweighted in ["uid", "date", "url"] {
        assert!(!profile.text_weights.contains_key(unweighted));
    }
}

#[test]
fn scoring_profile_lowercases_names_and_keeps_weights() {
    static FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor { name: "Headline", data_type: DataType::String, key: false, capabilities: &[Capability::Searchable], weight: Some(2.5) },
        FieldDescriptor { name: "Body", data_type: DataType::String, key: false, capabilities: &[Capability::Searchable], weight: None },
    ];
    let profile = build_scoring_profile(FIELDS, "p").expect("profile");
    assert_eq!(profile.text_weights.len(), 1);
    assert_eq!(profile.text_weights.get("headline"), Some(&2.5));
}

#[test]
fn scoring_profile_without_weights_is_empty_not_an_error() {
    static FIELDS: &[FieldDescriptor] = &[FieldDescriptor {
        name: "id",
        data_type: DataType::String,
        key: true,
        capabilities: &[Capability::Retrievable],
        weight: None,
    }];
    let profile = build_scoring_profile(FIELDS, "empty").expect("profile");
    assert!(profile.text_weights.is_empty());
}

#[test]
fn scoring_profile_rejects_blank_name() {
    let err = build_scoring_profile(DOCUMENT_FIELDS, "  ").unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn scoring_profile_is_deterministic() {
    let a = build_scoring_profile(DOCUMENT_FIELDS, "x").expect("a");
    let b = build_scoring_profile(DOCUMENT_FIELDS, "x").expect("b");
    assert_eq!(a, b);
}

#[test]
fn index_definition_wires_profile_and_cors() {
    let def = IndexDefinition::for_document::<Document>("articles").expect("definition");

    assert_eq!(def.name, "articles");
    assert_eq!(def.fields.len(), DOCUMENT_FIELDS.len());
    assert_eq!(def.scoring_profiles.len(), 1);
    assert_eq!(def.scoring_profiles[0].name, scoring_profile_name("articles"));
    assert_eq!(def.default_scoring_profile, "articles-scoring");
    assert_eq!(def.cors.allowed_origins, vec!["*".to_string()]);
    assert_eq!(def.cors.max_age_in_seconds, CORS_MAX_AGE_SECS);
}

#[test]
fn index_definition_rejects_blank_name() {
    assert!(matches!(IndexDefinition::for_document::<Document>(""), Err(Error::InvalidConfig(_))));
}
