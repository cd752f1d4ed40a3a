use crate::receipts::{enums::receipt_field::ReceiptField, models::receipt_record::ReceiptRecord};

const LABEL_STYLE: &str = "color: #FDD835; font-weight: bold;";
const INPUT_STYLE: &str = "width: 100%; padding: 10px; margin-top: 5px; border: 1px solid #4CAF50; border-radius: 5px; background-color: #2E7D32; color: #F1F8E9;";

fn input(record: &ReceiptRecord, field: ReceiptField, id: &str, label: &str, kind: &str) -> String {
    format!(
        r#"<label for="{id}" style="{LABEL_STYLE}">{label}:</label>
            <input id="{id}" type="{kind}" value="{value}" style="{INPUT_STYLE}"/>"#,
        value = record.value_or_fallback(field),
    )
}

/// Renders the editable receipt form shown on the display.
pub fn form_template(record: &ReceiptRecord) -> String {
    format!(
        r#"<div style="background-color: #000; color: #F1F8E9; padding: 20px; border-radius: 10px; max-width: 600px; margin: auto; font-family: 'system-ui', sans-serif; box-shadow: 0 4px 8px rgba(0,0,0,0.3);">
    <h2 style="color: #4CAF50; font-size: 24px; margin-bottom: 15px; text-align: center;">Receipt Details</h2>

    <div style="margin-bottom: 20px;">
        {vendor}
    </div>

    <div style="margin-bottom: 20px;">
        {address}
    </div>

    <div style="margin-bottom: 20px;">
        {phone}
    </div>

    <div style="margin-bottom: 20px;">
        {date}
    </div>

    <div style="display: flex; gap: 10px; margin-bottom: 20px;">
        <div style="flex: 1;">
            {tax}
        </div>
        <div style="flex: 1;">
            {total}
        </div>
    </div>

    <div style="margin-bottom: 20px;">
        {category}
    </div>

    <div style="background-color: #FDD835; color: #2E7D32; padding: 15px; border-radius: 5px; text-align: center; font-style: italic;">
        {commentary}
    </div>
</div>
"#,
        vendor = input(record, ReceiptField::VendorName, "vendor", "Vendor Name", "text"),
        address = input(record, ReceiptField::Address, "address", "Address", "text"),
        phone = input(record, ReceiptField::Phone, "phone", "Phone", "text"),
        date = input(record, ReceiptField::Date, "date", "Date", "date"),
        tax = input(record, ReceiptField::Tax, "tax", "Tax", "text"),
        total = input(record, ReceiptField::Total, "total", "Total", "text"),
        category = input(record, ReceiptField::Category, "category", "Category", "text"),
        commentary = record.value_or_fallback(ReceiptField::Commentary),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_present_values_in_inputs() {
        let mut record = ReceiptRecord::default();
        record.set(ReceiptField::VendorName, "Corner Store");
        record.set(ReceiptField::Address, "12 Main St");
        record.set(ReceiptField::Phone, "555-0100");
        record.set(ReceiptField::Date, "2024-03-01");
        record.set(ReceiptField::Tax, "1.05");
        record.set(ReceiptField::Total, "13.55");
        record.set(ReceiptField::Category, "Groceries");
        record.set(ReceiptField::Commentary, "Snacks again?");

        let html = form_template(&record);

        assert!(html.contains(r#"<input id="vendor" type="text" value="Corner Store""#));
        assert!(html.contains(r#"<input id="address" type="text" value="12 Main St""#));
        assert!(html.contains(r#"<input id="phone" type="text" value="555-0100""#));
        assert!(html.contains(r#"<input id="date" type="date" value="2024-03-01""#));
        assert!(html.contains(r#"<input id="tax" type="text" value="1.05""#));
        assert!(html.contains(r#"<input id="total" type="text" value="13.55""#));
        assert!(html.contains(r#"<input id="category" type="text" value="Groceries""#));
        assert!(html.contains("Snacks again?"));
        assert!(!html.contains("Unknown"));
    }

    #[test]
    fn test_renders_fallbacks_for_missing_values() {
        let html = form_template(&ReceiptRecord::default());

        assert!(html.contains(r#"<input id="vendor" type="text" value="Unknown""#));
        assert!(html.contains(r#"<input id="date" type="date" value="YYYY-MM-DD""#));
        assert!(html.contains(r#"<input id="tax" type="text" value="0.00""#));
        assert!(html.contains(r#"<input id="total" type="text" value="0.00""#));
        assert!(html.contains(r#"<input id="category" type="text" value="Unknown""#));
        assert!(html.contains("AI is thinking of something witty to say..."));
    }

    #[test]
    fn test_has_one_input_per_form_field() {
        let html = form_template(&ReceiptRecord::default());

        assert_eq!(html.matches("<input ").count(), 7);
        assert_eq!(html.matches("<label ").count(), 7);
        assert!(html.contains("Receipt Details"));
    }

    #[test]
    fn test_values_are_inserted_verbatim() {
        let mut record = ReceiptRecord::default();
        record.set(ReceiptField::VendorName, "A&W Restaurants");
        record.set(ReceiptField::Category, "Food & Drink");
        record.set(ReceiptField::Commentary, "Burgers > salad");

        let html = form_template(&record);

        assert!(html.contains(r#"<input id="vendor" type="text" value="A&W Restaurants""#));
        assert!(html.contains(r#"<input id="category" type="text" value="Food & Drink""#));
        assert!(html.contains("Burgers > salad"));
        assert!(!html.contains("&amp;"));
        assert!(!html.contains("&gt;"));
    }
}
