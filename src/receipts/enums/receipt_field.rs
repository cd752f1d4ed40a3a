/// A field of the receipt analysis that the form knows how to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceiptField {
    VendorName,
    Address,
    Phone,
    Date,
    Tax,
    Total,
    Category,
    Commentary,
}

impl ReceiptField {
    pub const ALL: [ReceiptField; 8] = [
        Self::VendorName,
        Self::Address,
        Self::Phone,
        Self::Date,
        Self::Tax,
        Self::Total,
        Self::Category,
        Self::Commentary,
    ];

    /// Key of the field in the analysis JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Self::VendorName => "vendor_name",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::Date => "date",
            Self::Tax => "tax",
            Self::Total => "total",
            Self::Category => "category",
            Self::Commentary => "commentary",
        }
    }

    /// Value shown when the analysis has nothing for this field.
    pub fn fallback(&self) -> &'static str {
        match self {
            Self::VendorName | Self::Address | Self::Phone | Self::Category => "Unknown",
            Self::Date => "YYYY-MM-DD",
            Self::Tax | Self::Total => "0.00",
            Self::Commentary => "AI is thinking of something witty to say...",
        }
    }

    pub fn from_key(key: &str) -> Option<ReceiptField> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}
