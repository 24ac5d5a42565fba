/// Tag for the Custom Item Listed event.
pub const ITEM_LISTED_TAG: u8 = u8::MAX - 5;

/// Tag for the Custom Item Canceled event.
pub const ITEM_CANCELED_TAG: u8 = u8::MAX - 6;

/// Tag for the Custom Item Bought event.
pub const ITEM_BOUGHT_TAG: u8 = u8::MAX - 7;

/// Tag for the Custom Approve event.
pub const APPROVE_TAG: u8 = u8::MAX - 8;
