use serde_json::Value;

use crate::{
    build::{extract_extensions, is_extension_key, list_field, map_field, mapping_entries, object_field, raw_field, raw_value},
    sources::{Extensions, Field, ObjectOrInvalid, SourceList, SourceMap},
    yaml::{NodeId, YamlArena},
};

use super::{
    build_or_reference, discriminator, external_doc, xml, Discriminator, ExternalDoc,
    ObjectOrReference, Xml,
};

/// Schema Object (OpenAPI 3.0 dialect of JSON Schema).
///
/// In v3.0 every nested schema position holds either a `Schema` or a
/// [`Reference`](super::Reference); a `$ref` key makes the whole position a
/// reference. Keyword values are kept raw: `minimum: "low"` is preserved,
/// not rejected.
///
/// See <https://spec.openapis.org/oas/v3.0.4#schema-object>.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub root_node: NodeId,

    // Metadata keywords.
    pub title: Field<Value>,
    pub description: Field<Value>,
    pub default: Field<Value>,
    pub example: Field<Value>,
    pub deprecated: Field<Value>,
    pub read_only: Field<Value>,
    pub write_only: Field<Value>,

    // Type and enumeration.
    pub schema_type: Field<Value>,
    pub format: Field<Value>,
    pub enum_values: Field<Value>,
    pub nullable: Field<Value>,

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
    pub items: Field<Box<ObjectOrReference<Schema>>>,
    pub max_items: Field<Value>,
    pub min_items: Field<Value>,
    pub unique_items: Field<Value>,

    // Object validation.
    pub properties: Field<SourceMap<ObjectOrReference<Schema>>>,
    pub additional_properties: Field<ObjectOrInvalid<AdditionalProperties>>,
    pub required: Field<Value>,
    pub max_properties: Field<Value>,
    pub min_properties: Field<Value>,

    // Composition.
    pub all_of: Field<SourceList<ObjectOrReference<Schema>>>,
    pub one_of: Field<SourceList<ObjectOrReference<Schema>>>,
    pub any_of: Field<SourceList<ObjectOrReference<Schema>>>,
    pub not_schema: Field<Box<ObjectOrReference<Schema>>>,

    // OpenAPI-specific.
    pub discriminator: Field<ObjectOrInvalid<Discriminator>>,
    pub xml: Field<ObjectOrInvalid<Xml>>,
    pub external_docs: Field<ObjectOrInvalid<ExternalDoc>>,

    pub extensions: Extensions,
}

/// `additionalProperties` admits a boolean as well as a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    Boolean(bool),
    Schema(Box<ObjectOrReference<Schema>>),
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
        return ObjectOrInvalid::Object(AdditionalProperties::Schema(Box::new(
            build_or_reference(arena, node, build),
        )));
    }

    ObjectOrInvalid::Invalid(raw_value(arena, node))
}

fn boxed_subschema(arena: &YamlArena, node: NodeId) -> Box<ObjectOrReference<Schema>> {
    Box::new(build_or_reference(arena, node, build))
}

pub fn build(arena: &YamlArena, node: NodeId) -> ObjectOrInvalid<Schema> {
    let entries = match mapping_entries(arena, node) {
        Ok(entries) => entries,
        Err(raw) => return ObjectOrInvalid::Invalid(raw),
    };

    let mut schema = Schema {
        root_node: node,
        title: None,
        description: None,
        default: None,
        example: None,
        deprecated: None,
        read_only: None,
        write_only: None,
        schema_type: None,
        format: None,
        enum_values: None,
        nullable: None,
        multiple_of: None,
        maximum: None,
        exclusive_maximum: None,
        minimum: None,
        exclusive_minimum: None,
        max_length: None,
        min_length: None,
        pattern: None,
        items: None,
        max_items: None,
        min_items: None,
        unique_items: None,
        properties: None,
        additional_properties: None,
        required: None,
        max_properties: None,
        min_properties: None,
        all_of: None,
        one_of: None,
        any_of: None,
        not_schema: None,
        discriminator: None,
        xml: None,
        external_docs: None,
        extensions: extract_extensions(arena, entries),
    };

    for &(key, value) in entries {
        let name = arena.key_string(key);
        if is_extension_key(&name) {
            continue;
        }

        match name.as_str() {
            "title" => schema.title = Some(raw_field(arena, key, value)),
            "description" => schema.description = Some(raw_field(arena, key, value)),
            "default" => schema.default = Some(raw_field(arena, key, value)),
            "example" => schema.example = Some(raw_field(arena, key, value)),
            "deprecated" => schema.deprecated = Some(raw_field(arena, key, value)),
            "readOnly" => schema.read_only = Some(raw_field(arena, key, value)),
            "writeOnly" => schema.write_only = Some(raw_field(arena, key, value)),
            "type" => schema.schema_type = Some(raw_field(arena, key, value)),
            "format" => schema.format = Some(raw_field(arena, key, value)),
            "enum" => schema.enum_values = Some(raw_field(arena, key, value)),
            "nullable" => schema.nullable = Some(raw_field(arena, key, value)),
            "multipleOf" => schema.multiple_of = Some(raw_field(arena, key, value)),
            "maximum" => schema.maximum = Some(raw_field(arena, key, value)),
            "exclusiveMaximum" => schema.exclusive_maximum = Some(raw_field(arena, key, value)),
            "minimum" => schema.minimum = Some(raw_field(arena, key, value)),
            "exclusiveMinimum" => schema.exclusive_minimum = Some(raw_field(arena, key, value)),
            "maxLength" => schema.max_length = Some(raw_field(arena, key, value)),
            "minLength" => schema.min_length = Some(raw_field(arena, key, value)),
            "pattern" => schema.pattern = Some(raw_field(arena, key, value)),
            "items" => schema.items = Some(object_field(arena, key, value, boxed_subschema)),
            "maxItems" => schema.max_items = Some(raw_field(arena, key, value)),
            "minItems" => schema.min_items = Some(raw_field(arena, key, value)),
            "uniqueItems" => schema.unique_items = Some(raw_field(arena, key, value)),
            "properties" => {
                schema.properties = Some(map_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, build)
                }));
            }
            "additionalProperties" => {
                schema.additional_properties =
                    Some(object_field(arena, key, value, build_additional_properties));
            }
            "required" => schema.required = Some(raw_field(arena, key, value)),
            "maxProperties" => schema.max_properties = Some(raw_field(arena, key, value)),
            "minProperties" => schema.min_properties = Some(raw_field(arena, key, value)),
            "allOf" => {
                schema.all_of = Some(list_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, build)
                }));
            }
            "oneOf" => {
                schema.one_of = Some(list_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, build)
                }));
            }
            "anyOf" => {
                schema.any_of = Some(list_field(arena, key, value, |arena, node| {
                    build_or_reference(arena, node, build)
                }));
            }
            "not" => schema.not_schema = Some(object_field(arena, key, value, boxed_subschema)),
            "discriminator" => {
                schema.discriminator =
                    Some(object_field(arena, key, value, discriminator::build));
            }
            "xml" => schema.xml = Some(object_field(arena, key, value, xml::build)),
            "externalDocs" => {
                schema.external_docs = Some(object_field(arena, key, value, external_doc::build));
            }
            _ => {}
        }
    }

    ObjectOrInvalid::Object(schema)
}
