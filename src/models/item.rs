use serde::Serialize;

/// One of the fixed sample records served by `/api/data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: i64,
    pub name: &'static str,
    pub description: &'static str,
}

// Kept in id order; `all()` relies on it.
static ITEMS: [Item; 3] = [
    Item {
        id: 1,
        name: "Item 1",
        description: "First item",
    },
    Item {
        id: 2,
        name: "Item 2",
        description: "Second item",
    },
    Item {
        id: 3,
        name: "Item 3",
        description: "Third item",
    },
];

impl Item {
    pub fn all() -> &'static [Item] {
        &ITEMS
    }

    pub fn find(id: i64) -> Option<&'static Item> {
        ITEMS.iter().find(|item| item.id == id)
    }
}
