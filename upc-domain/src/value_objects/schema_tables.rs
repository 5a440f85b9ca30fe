// Exposed GraphQL surface: type names, Item fields and `item` arguments

use crate::value_objects::field_resolution::{FieldResolution, ItemFieldSpec};

pub const ITEM_TYPE_NAME: &str = "Item";
pub const ITEM_TYPE_DESCRIPTION: &str = "Information about the item requested using its UPC";
pub const QUERY_TYPE_NAME: &str = "Query";
pub const QUERY_TYPE_DESCRIPTION: &str = "The root of the query";
pub const ITEM_QUERY_FIELD: &str = "item";
pub const ITEM_QUERY_DESCRIPTION: &str =
    "The item being requested from the server using a UPC and API key";

pub const ITEM_FIELDS: &[ItemFieldSpec] = &[
    ItemFieldSpec {
        name: "valid",
        description: "Indicates whether the request was valid",
        resolution: FieldResolution::Validity,
    },
    ItemFieldSpec {
        name: "reason",
        description: "Explains why the request was not valid",
        resolution: FieldResolution::Direct,
    },
    ItemFieldSpec {
        name: "number",
        description: "The UPC value sent with the request",
        resolution: FieldResolution::Direct,
    },
    ItemFieldSpec {
        name: "itemName",
        description: "The name of the requested item",
        resolution: FieldResolution::SnakeCase,
    },
    ItemFieldSpec {
        name: "alias",
        description: "Another name for the requested item",
        resolution: FieldResolution::Direct,
    },
    ItemFieldSpec {
        name: "description",
        description: "A description of the requested item",
        resolution: FieldResolution::Direct,
    },
    ItemFieldSpec {
        name: "avgPrice",
        description: "The average price of the item",
        resolution: FieldResolution::SnakeCase,
    },
    ItemFieldSpec {
        name: "rateUp",
        description: "The number of users who rated this item entry positively",
        resolution: FieldResolution::SnakeCase,
    },
    ItemFieldSpec {
        name: "rateDown",
        description: "The number of users who rated this item entry negatively",
        resolution: FieldResolution::SnakeCase,
    },
];

/// A required `String!` argument of the `item` query field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub name: &'static str,
    pub type_name: &'static str,
    pub description: &'static str,
}

pub const API_KEY_ARGUMENT: &str = "apiKey";
pub const UPC_ARGUMENT: &str = "upc";

pub const ITEM_QUERY_ARGUMENTS: &[ArgumentSpec] = &[
    ArgumentSpec {
        name: API_KEY_ARGUMENT,
        type_name: "String!",
        description: "The API key that must be obtained at http://upcdatabase.org/",
    },
    ArgumentSpec {
        name: UPC_ARGUMENT,
        type_name: "String!",
        description: "The UPC of the item your are requesting",
    },
];

/// Declared type of an argument, looked up by field and argument name.
pub fn argument_type(field: &str, argument: &str) -> Option<&'static str> {
    if field != ITEM_QUERY_FIELD {
        return None;
    }
    ITEM_QUERY_ARGUMENTS
        .iter()
        .find(|spec| spec.name == argument)
        .map(|spec| spec.type_name)
}
