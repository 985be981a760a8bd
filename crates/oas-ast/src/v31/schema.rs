use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, list_field, map_field, mapping_entries, object_field, raw_field, raw_value},
    sources::{Extensions, Field, ObjectOrInvalid, SourceList, SourceMap},
    yaml::{NodeId, YamlArena},
};

use super::{discriminator, external_doc, xml, Discriminator, ExternalDoc, Xml};

/// Schema Object (JSON Schema 2020-12 dialect, as adopted by OpenAPI 3.1).
///
/// A 3.1 schema carries `$ref` as an ordinary keyword, so nested schema
/// positions always build as `Schema`, never as a
/// [`Reference`](super::Reference). Keyword values are kept raw; boolean
/// schemas (`additionalProperties: true` aside, which is modeled) are
/// preserved as raw salvage for validators to interpret.
///
/// See <https://spec.openapis.org/oas/v3.1.1#schema-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub root_node: NodeId,

    // Identity, references and meta-data of the 2020-12 core vocabulary.
    pub ref_path: Field<Value>,
    pub schema_dialect: Field<Value>,
    pub id: Field<Value>,
    pub anchor: Field<Value>,
    pub dynamic_anchor: Field<Value>,
    pub dynamic_ref: Field<Value>,
    pub vocabulary: Field<Value>,
    pub comment: Field<Value>,
    pub defs: Field<SourceMap<ObjectOrInvalid<Schema>>>,

    // Annotation keywords.
    pub title: Field<Value>,
    pub description: Field<Value>,
    pub default: Field<Value>,
    pub deprecated: Field<Value>,
    pub read_only: Field<Value>,
    pub write_only: Field<Value>,
    pub examples: Field<Value>,

    // Type and enumeration.
    pub schema_type: Field<Value>,
    pub format: Field<Value>,
    pub enum_values: Field<Value>,
    pub const_value: Field<Value>,

    // Numeric validation.
    pub multiple_of: Field<Value>,
    pub maximum: Field<Value>,
    pub exclusive_maximum: Field<Value>,
    pub minimum: Field<Value>,
    pub exclusive_minimum: Field<Value>,

    // String validation.
    pub max_length: Field<Value>,
    pub min_length: Field<Value>,
    pub pattern: Field<Value>,

    // Array validation.
    pub items: Field<Box<ObjectOrInvalid<Schema>>>,
    pub prefix_items: Field<SourceList<ObjectOrInvalid<Schema>>>,
    pub contains: Field<Box<ObjectOrInvalid<Schema>>>,
    pub min_contains: Field<Value>,
    pub max_contains: Field<Value>,
    pub max_items: Field<Value>,
    pub min_items: Field<Value>,
    pub unique_items: Field<Value>,
    pub unevaluated_items: Field<Box<ObjectOrInvalid<Schema>>>,

    // Object validation.
    pub properties: Field<SourceMap<ObjectOrInvalid<Schema>>>,
    pub pattern_properties: Field<SourceMap<ObjectOrInvalid<Schema>>>,
    pub additional_properties: Field<ObjectOrInvalid<AdditionalProperties>>,
    pub property_names: Field<Box<ObjectOrInvalid<Schema>>>,
    pub unevaluated_properties: Field<Box<ObjectOrInvalid<Schema>>>,
    pub required: Field<Value>,
    pub max_properties: Field<Value>,
    pub min_properties: Field<Value>,
    pub dependent_required: Field<Value>,
    pub dependent_schemas: Field<SourceMap<ObjectOrInvalid<Schema>>>,

    // Composition and conditionals.
    pub all_of: Field<SourceList<ObjectOrInvalid<Schema>>>,
    pub one_of: Field<SourceList<ObjectOrInvalid<Schema>>>,
    pub any_of: Field<SourceList<ObjectOrInvalid<Schema>>>,
    pub not_schema: Field<Box<ObjectOrInvalid<Schema>>>,
    pub if_schema: Field<Box<ObjectOrInvalid<Schema>>>,
    pub then_schema: Field<Box<ObjectOrInvalid<Schema>>>,
    pub else_schema: Field<Box<ObjectOrInvalid<Schema>>>,

    // Content-encoded strings.
    pub content_media_type: Field<Value>,
    pub content_encoding: Field<Value>,
    pub content_schema: Field<Box<ObjectOrInvalid<Schema>>>,

    // OpenAPI-specific.
    pub discriminator: Field<ObjectOrInvalid<Discriminator>>,
    pub xml: Field<ObjectOrInvalid<Xml>>,
    pub external_docs: Field<ObjectOrInvalid<ExternalDoc>>,
    pub example: Field<Value>,

    pub extensions: Extensions,
}

/// `additionalProperties` admits a boolean as well as a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    Boolean(bool),
    Schema(Box<ObjectOrInvalid<Schema>>),
}

fn build_additional_properties(
    arena: &YamlArena,
    node: NodeId,
) -> ObjectOrInvalid<AdditionalProperties> {
    if let Some(scalar) = arena.scalar(node) {
        if let crate::yaml::ScalarValue::Bool(allowed) = scalar.value {
            return ObjectOrInvalid::Object(AdditionalProperties::Boolean(allowed));
        }
        return ObjectOrInvalid::Invalid(raw_value(arena, node));
    }

    if arena.mapping(node).is_some() {
        return ObjectOrInvalid::Object(AdditionalProperties::Schema(Box::new(build(
            arena, node,
        ))));
    }

    ObjectOrInvalid::Invalid(raw_value(arena, node))
}

fn boxed_subschema(arena: &YamlArena, node: NodeId) -> Box<ObjectOrInvalid<Schema>> {
    Box::new(build(arena, node))
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Schema> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut schema = Schema {
        root_node: node,
        ref_path: None,
        schema_dialect: None,
        id: None,
        anchor: None,
        dynamic_anchor: None,
        dynamic_ref: None,
        vocabulary: None,
        comment: None,
        defs: None,
        title: None,
        description: None,
        default: None,
        deprecated: None,
        read_only: None,
        write_only: None,
        examples: None,
        schema_type: None,
        format: None,
        enum_values: None,
        const_value: None,
        multiple_of: None,
        maximum: None,
        exclusive_maximum: None,
        minimum: None,
        exclusive_minimum: None,
        max_length: None,
        min_length: None,
        pattern: None,
        items: None,
        prefix_items: None,
        contains: None,
        min_contains: None,
        max_contains: None,
        max_items: None,
        min_items: None,
        unique_items: None,
        unevaluated_items: None,
        properties: None,
        pattern_properties: None,
        additional_properties: None,
        property_names: None,
        unevaluated_properties: None,
        required: None,
        max_properties: None,
        min_properties: None,
        dependent_required: None,
        dependent_schemas: None,
        all_of: None,
        one_of: None,
        any_of: None,
        not_schema: None,
        if_schema: None,
        then_schema: None,
        else_schema: None,
        content_media_type: None,
        content_encoding: None,
        content_schema: None,
        discriminator: None,
        xml: None,
        external_docs: None,
        example: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "$ref" => schema.ref_path = Some(raw_field(arena, key, value)),
            "$schema" => schema.schema_dialect = Some(raw_field(arena, key, value)),
            "$id" => schema.id = Some(raw_field(arena, key, value)),
            "$anchor" => schema.anchor = Some(raw_field(arena, key, value)),
            "$dynamicAnchor" => schema.dynamic_anchor = Some(raw_field(arena, key, value)),
            "$dynamicRef" => schema.dynamic_ref = Some(raw_field(arena, key, value)),
            "$vocabulary" => schema.vocabulary = Some(raw_field(arena, key, value)),
            "$comment" => schema.comment = Some(raw_field(arena, key, value)),
            "$defs" => schema.defs = Some(map_field(arena, key, value, build)),
            "title" => schema.title = Some(raw_field(arena, key, value)),
            "description" => schema.description = Some(raw_field(arena, key, value)),
            "default" => schema.default = Some(raw_field(arena, key, value)),
            "deprecated" => schema.deprecated = Some(raw_field(arena, key, value)),
            "readOnly" => schema.read_only = Some(raw_field(arena, key, value)),
            "writeOnly" => schema.write_only = Some(raw_field(arena, key, value)),
            "examples" => schema.examples = Some(raw_field(arena, key, value)),
            "type" => schema.schema_type = Some(raw_field(arena, key, value)),
            "format" => schema.format = Some(raw_field(arena, key, value)),
            "enum" => schema.enum_values = Some(raw_field(arena, key, value)),
            "const" => schema.const_value = Some(raw_field(arena, key, value)),
            "multipleOf" => schema.multiple_of = Some(raw_field(arena, key, value)),
            "maximum" => schema.maximum = Some(raw_field(arena, key, value)),
            "exclusiveMaximum" => schema.exclusive_maximum = Some(raw_field(arena, key, value)),
            "minimum" => schema.minimum = Some(raw_field(arena, key, value)),
            "exclusiveMinimum" => schema.exclusive_minimum = Some(raw_field(arena, key, value)),
            "maxLength" => schema.max_length = Some(raw_field(arena, key, value)),
            "minLength" => schema.min_length = Some(raw_field(arena, key, value)),
            "pattern" => schema.pattern = Some(raw_field(arena, key, value)),
            "items" => schema.items = Some(object_field(arena, key, value, boxed_subschema)),
            "prefixItems" => schema.prefix_items = Some(list_field(arena, key, value, build)),
            "contains" => schema.contains = Some(object_field(arena, key, value, boxed_subschema)),
            "minContains" => schema.min_contains = Some(raw_field(arena, key, value)),
            "maxContains" => schema.max_contains = Some(raw_field(arena, key, value)),
            "maxItems" => schema.max_items = Some(raw_field(arena, key, value)),
            "minItems" => schema.min_items = Some(raw_field(arena, key, value)),
            "uniqueItems" => schema.unique_items = Some(raw_field(arena, key, value)),
            "unevaluatedItems" => {
                schema.unevaluated_items = Some(object_field(arena, key, value, boxed_subschema));
            }
            "properties" => schema.properties = Some(map_field(arena, key, value, build)),
            "patternProperties" => {
                schema.pattern_properties = Some(map_field(arena, key, value, build));
            }
            "additionalProperties" => {
                schema.additional_properties =
                    Some(object_field(arena, key, value, build_additional_properties));
            }
            "propertyNames" => {
                schema.property_names = Some(object_field(arena, key, value, boxed_subschema));
            }
            "unevaluatedProperties" => {
                schema.unevaluated_properties =
                    Some(object_field(arena, key, value, boxed_subschema));
            }
            "required" => schema.required = Some(raw_field(arena, key, value)),
            "maxProperties" => schema.max_properties = Some(raw_field(arena, key, value)),
            "minProperties" => schema.min_properties = Some(raw_field(arena, key, value)),
            "dependentRequired" => schema.dependent_required = Some(raw_field(arena, key, value)),
            "dependentSchemas" => {
                schema.dependent_schemas = Some(map_field(arena, key, value, build));
            }
            "allOf" => schema.all_of = Some(list_field(arena, key, value, build)),
            "oneOf" => schema.one_of = Some(list_field(arena, key, value, build)),
            "anyOf" => schema.any_of = Some(list_field(arena, key, value, build)),
            "not" => schema.not_schema = Some(object_field(arena, key, value, boxed_subschema)),
            "if" => schema.if_schema = Some(object_field(arena, key, value, boxed_subschema)),
            "then" => schema.then_schema = Some(object_field(arena, key, value, boxed_subschema)),
            "else" => schema.else_schema = Some(object_field(arena, key, value, boxed_subschema)),
            "contentMediaType" => schema.content_media_type = Some(raw_field(arena, key, value)),
            "contentEncoding" => schema.content_encoding = Some(raw_field(arena, key, value)),
            "contentSchema" => {
                schema.content_schema = Some(object_field(arena, key, value, boxed_subschema));
            }
            "discriminator" => {
                schema.discriminator = Some(object_field(arena, key, value, discriminator::build));
            }
            "xml" => schema.xml = Some(object_field(arena, key, value, xml::build)),
            "externalDocs" => {
                schema.external_docs = Some(object_field(arena, key, value, external_doc::build));
            }
            "example" => schema.example = Some(raw_field(arena, key, value)),
            _ => {}
        }
    }

    ObjectOrInvalid::Object(schema)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::yaml::parse_yaml;

    fn built(yaml: &str) -> Schema {
        let arena = parse_yaml(yaml).unwrap();
        match build(&arena, arena.root().unwrap()) {
            ObjectOrInvalid::Object(schema) => schema,
            ObjectOrInvalid::Invalid(_) => panic!("expected a Schema"),
        }
    }

    #[test]
    fn ref_is_an_ordinary_keyword() {
        let schema = built(indoc::indoc! {"
            $ref: '#/components/schemas/Base'
            description: local override
        "});

        assert_eq!(
            schema.ref_path.as_ref().unwrap().value,
            "#/components/schemas/Base",
        );
        assert_eq!(schema.description.as_ref().unwrap().value, "local override");
    }

    #[test]
    fn identity_keywords() {
        let schema = built(indoc::indoc! {"
            $id: https://example.com/schemas/pet
            $schema: https://json-schema.org/draft/2020-12/schema
            $anchor: pet
            $defs:
              name:
                type: string
        "});

        assert_eq!(
            schema.id.as_ref().unwrap().value,
            "https://example.com/schemas/pet",
        );
        assert_eq!(schema.anchor.as_ref().unwrap().value, "pet");

        let defs = schema.defs.as_ref().unwrap().value.as_object().unwrap();
        let name = defs.get("name").unwrap().as_object().unwrap();
        assert_eq!(name.schema_type.as_ref().unwrap().value, "string");
    }

    #[test]
    fn type_arrays_and_const() {
        let schema = built(indoc::indoc! {"
            type: [string, 'null']
            const: fixed
        "});

        assert_eq!(
            schema.schema_type.as_ref().unwrap().value,
            json!(["string", "null"]),
        );
        assert_eq!(schema.const_value.as_ref().unwrap().value, "fixed");
    }

    #[test]
    fn tuple_and_conditional_keywords() {
        let schema = built(indoc::indoc! {"
            prefixItems:
              - type: integer
              - type: string
            items: {type: boolean}
            if:
              properties:
                kind: {const: dog}
            then:
              required: [barks]
            else:
              required: [meows]
        "});

        let prefix = schema.prefix_items.as_ref().unwrap().value.as_object().unwrap();
        assert_eq!(prefix.len(), 2);

        let items = schema.items.as_ref().unwrap().value.as_object().unwrap();
        assert_eq!(items.schema_type.as_ref().unwrap().value, "boolean");

        assert!(schema.if_schema.is_some());
        assert!(schema.then_schema.is_some());
        assert!(schema.else_schema.is_some());
    }

    #[test]
    fn dependent_and_pattern_properties() {
        let schema = built(indoc::indoc! {"
            patternProperties:
              '^x-':
                type: string
            dependentRequired:
              credit_card: [billing_address]
            dependentSchemas:
              credit_card:
                properties:
                  billing_address: {type: string}
        "});

        let patterns = schema.pattern_properties.as_ref().unwrap().value.as_object().unwrap();
        assert!(patterns.get("^x-").is_some());

        assert_eq!(
            schema.dependent_required.as_ref().unwrap().value,
            json!({"credit_card": ["billing_address"]}),
        );

        let dependents = schema.dependent_schemas.as_ref().unwrap().value.as_object().unwrap();
        assert!(dependents.get("credit_card").is_some());
    }

    #[test]
    fn boolean_subschema_is_preserved_raw() {
        let schema = built("items: true\n");

        let items = &schema.items.as_ref().unwrap().value;
        assert_matches!(**items, ObjectOrInvalid::Invalid(_));
    }

    #[test]
    fn nested_schemas_never_become_references() {
        let schema = built(indoc::indoc! {"
            properties:
              pet:
                $ref: '#/components/schemas/Pet'
        "});

        let properties = schema.properties.as_ref().unwrap().value.as_object().unwrap();
        let pet = properties.get("pet").unwrap().as_object().unwrap();
        assert_eq!(
            pet.ref_path.as_ref().unwrap().value,
            "#/components/schemas/Pet",
        );
    }
}
