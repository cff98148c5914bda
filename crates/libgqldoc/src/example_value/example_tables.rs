//! Declarative lookup tables behind [`generate_example()`].
//!
//! [`generate_example()`]: crate::example_value::generate_example

use crate::example_value::ExampleLiteral;
use crate::example_value::ExampleLiteral::Bool;
use crate::example_value::ExampleLiteral::Float;
use crate::example_value::ExampleLiteral::Int;
use crate::example_value::ExampleLiteral::Str;
use crate::example_value::ExampleLiteral::StrList;

/// Examples keyed by field, argument or input-field name. Consulted first.
pub const FIELD_EXAMPLES: &[(&str, ExampleLiteral)] = &[
    // Pagination
    ("startCursor", Str("YXJyYXljb25uZWN0aW9uOjA=")),
    ("cursor", Str("eyJpZCI6MTIzfQ==")),
    ("endCursor", Str("dXNlcl8yNHo4cXA5")),
    ("first", Int(20)),
    ("last", Int(15)),
    ("after", Str("eyJpZCI6MTAwfQ==")),
    ("before", Str("zxJpABI6MjAwfW==")),
    ("totalCount", Int(42)),

    // Dates and times
    ("check_in", Str("2025-03-15T15:00:00Z")),
    ("check_out", Str("2025-03-18T11:00:00Z")),
    ("reservation_from", Str("2025-03-15")),
    ("reservation_to", Str("2025-03-18")),
    ("createdAt", Str("2025-01-10T09:00:00Z")),
    ("updatedAt", Str("2025-01-12T14:30:00Z")),
    ("cancelledAt", Str("2025-01-11T10:00:00Z")),
    ("birthday", Str("1985-06-20")),

    // Client
    ("firstname", Str("Max")),
    ("lastname", Str("Mustermann")),
    ("company", Str("Acme GmbH")),
    ("companyAdditionalInformation", Str("Attn: Booking Dept")),
    ("street", Str("Musterstraße 123")),
    ("zipcode", Str("10115")),
    ("city", Str("Berlin")),
    ("country", Str("DE")),
    ("nationality", Str("DE")),
    ("language", Str("de")),
    ("email", Str("guest@example.com")),
    ("telephone", Str("+49 30 12345678")),
    ("mobile", Str("+49 170 1234567")),
    ("fax", Str("+49 30 12345679")),
    ("passportNumber", Str("C01X00T47")),
    ("idCardNumber", Str("L01X00F47")),
    ("issuingAuthority", Str("Stadt Berlin")),
    ("carPlateNumber", Str("B-AB 1234")),

    // Rooms and categories
    ("name", Str("Double Room Superior")),
    ("roomName", Str("312")),
    ("areaName", Str("3rd Floor")),
    ("description", Str("Spacious double room with city view")),
    ("standardOccupancy", Int(2)),
    ("minOccupancy", Int(1)),
    ("maxOccupancy", Int(4)),
    ("minimumRate", Str("89.00")),
    ("availability", Int(5)),

    // Reservations
    ("code", Str("RES-2025-001234")),
    ("bookingChannelCode", Str("BDC-123456789")),
    ("groupName", Str("Mustermann Family")),
    ("notes", Str("Late arrival expected")),
    ("guestMessage", Str("Welcome! Your room is ready.")),
    ("mealNotes", Str("Vegetarian breakfast")),
    ("maidNotes", Str("Extra pillows requested")),
    ("stayPreferences", Str("High floor, quiet room")),
    ("mealPreferences", Str("No shellfish")),

    // Pricing
    ("lodgingsGross", Str("359.97")),
    ("additionalSales", Str("30.00")),
    ("packPriceGross", Str("149.99")),
    ("packPriceNet", Str("109.24")),
    ("lodgingGross", Str("99.99")),
    ("lodgingNet", Str("84.03")),

    // Statistics
    ("occupancy", Float(0.75)),

    // Webhooks
    ("url", Str("https://api.example.com/webhooks/3rpms")),
    ("secret", Str("whsec_abc123xyz789")),
    ("events", StrList(&["reservation.created", "reservation.updated"])),

    // Room access
    ("pin", Str("1234")),
    ("compartment", Str("A12")),
    ("qrData", Str("ROOM312-2025031518-TOKEN")),

    // URLs
    ("selfcheckinUrl", Str("https://hotel.3rpms.de/checkin/res_abc123")),
    ("selfcheckout_url", Str("https://hotel.3rpms.de/checkout/xyz789def")),
    ("pmsUrl", Str("https://hotel.3rpms.de/reservation/abc123")),
    ("receiptUrl", Str("https://hotel.3rpms.de/receipt/abc123.pdf")),
    ("receiptPdfUrl", Str("https://pos.example.com/receipts/12345.pdf")),

    // External sales
    ("receiptNumber", Str("POS-2025-00001")),
    ("waiterName", Str("Thomas")),
    ("tableName", Str("Table 7")),

    // Restrictions
    ("stopSell", Bool(false)),
    ("minStay", Int(1)),
    ("maxStay", Int(14)),
    ("closedToArrival", Bool(false)),
    ("closedToDeparture", Bool(false)),
    ("guarantee", Bool(false)),
    ("cancellation", Int(7)),
    ("breakfastIncluded", Bool(true)),

    // Misc
    ("countTowardsPerformance", Bool(true)),
    ("selfcheckout_enabled", Bool(true)),
    ("newsletterSubscriptionEnabled", Bool(true)),
    ("birthdayGreetingsEnabled", Bool(true)),
    ("deleted", Bool(true)),
    ("created", Bool(true)),
    ("hasNextPage", Bool(true)),
    ("hasPreviousPage", Bool(false)),
];

/// Suffix shared by every synthesized `ID` example.
pub const ID_SUFFIX: &str = "24z8qp9";

/// Prefix of synthesized `ID` examples, keyed by the parent type name.
/// Parents not listed here get no prefix.
pub const ID_PREFIXES: &[(&str, &str)] = &[
    ("RoomStay", "rs_"),
    ("Reservation", "res_"),
    ("Category", "cat_"),
    ("RoomSetup", "room_"),
    ("Client", "cli_"),
    ("Person", "cli_"),
    ("Company", "cli_"),
    ("WebhookEndpoint", "wh_"),
    ("PaymentMethod", "pm_"),
    ("RoomAccessKey", "rak_"),
    ("ExternalSalesProduct", "prod_"),
    ("ClientTitle", "title_"),
    ("PaymentTerms", "pt_"),
    ("IncomingPayment", "pay_"),
];

/// Examples keyed by the underlying type name (enums and scalars).
pub const TYPE_EXAMPLES: &[(&str, ExampleLiteral)] = &[
    ("CleaningStatus", Str("CLEAN")),
    ("WebhookEndpointStatus", Str("ENABLED")),
    ("SelfcheckinStatus", Str("AVAILABLE")),
    ("ReservationStatus", Str("ACTIVE")),
    ("Date", Str("2025-03-15")),
    ("Datetime", Str("2025-03-15T14:30:00Z")),
    ("Boolean", Bool(true)),
];

/// How a [`DecimalRule`] matches the field name.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldNameMatch {
    Exact(&'static str),
    /// Case-insensitive substring match. The needle must be lowercase.
    ContainsIgnoreCase(&'static str),
}
impl FieldNameMatch {
    pub fn matches(&self, field_name: &str) -> bool {
        match self {
            Self::Exact(name) => field_name == *name,
            Self::ContainsIgnoreCase(needle) => {
                field_name.to_lowercase().contains(needle)
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecimalRule {
    pub field_name: FieldNameMatch,
    pub example: &'static str,
}

/// Name of the scalar whose examples come from [`DECIMAL_RULES`].
pub const DECIMAL_TYPE_NAME: &str = "Decimal";

/// Rules for `Decimal` values, tried in order.
pub const DECIMAL_RULES: &[DecimalRule] = &[
    DecimalRule { field_name: FieldNameMatch::Exact("gross"), example: "389.97" },
    DecimalRule { field_name: FieldNameMatch::Exact("adr"), example: "125.00" },
    DecimalRule { field_name: FieldNameMatch::Exact("revPAR"), example: "93.75" },
    DecimalRule { field_name: FieldNameMatch::ContainsIgnoreCase("amount"), example: "129.99" },
];

/// `Decimal` example used when no [`DECIMAL_RULES`] entry matches.
pub const DECIMAL_FALLBACK: &str = "99.00";
