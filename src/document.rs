//! Wire shapes for the goods-turnover document payload.
//!
//! Field names follow the endpoint's JSON contract exactly. Most keys are snake_case; the two
//! camelCase exceptions (`importRequest` and `description.participantInn`) are preserved
//! verbatim because the endpoint rejects anything else.

// self
use crate::_prelude::*;

/// A goods-turnover document submitted for introducing goods into circulation.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Document {
	/// Participant description block.
	pub description: DocumentDescription,
	/// Document identifier.
	pub doc_id: String,
	/// Document status.
	pub doc_status: String,
	/// Document type code.
	pub doc_type: String,
	/// Whether the document accompanies an import request.
	#[serde(rename = "importRequest")]
	pub import_request: bool,
	/// Owner taxpayer identifier (INN).
	pub owner_inn: String,
	/// Participant taxpayer identifier (INN).
	pub participant_inn: String,
	/// Producer taxpayer identifier (INN).
	pub producer_inn: String,
	/// Production date, `YYYY-MM-DD`.
	pub production_date: String,
	/// Production type code.
	pub production_type: String,
	/// Products covered by the document.
	pub products: Vec<Product>,
	/// Registration date, `YYYY-MM-DD`.
	pub reg_date: String,
	/// Registration number.
	pub reg_number: String,
}

/// Participant description block nested inside a [`Document`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DocumentDescription {
	/// Participant taxpayer identifier; this nested key is camelCase on the wire.
	#[serde(rename = "participantInn")]
	pub participant_inn: String,
}

/// A single product line item inside a [`Document`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Product {
	/// Certificate document code.
	pub certificate_document: String,
	/// Certificate document date, `YYYY-MM-DD`.
	pub certificate_document_date: String,
	/// Certificate document number.
	pub certificate_document_number: String,
	/// Owner taxpayer identifier (INN).
	pub owner_inn: String,
	/// Producer taxpayer identifier (INN).
	pub producer_inn: String,
	/// Production date, `YYYY-MM-DD`.
	pub production_date: String,
	/// TN VED commodity code.
	pub tnved_code: String,
	/// Unit identification code.
	pub uit_code: String,
	/// Aggregated unit identification code.
	pub uitu_code: String,
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn fixture() -> Document {
		Document {
			description: DocumentDescription { participant_inn: "123456789".into() },
			doc_id: "doc123".into(),
			doc_status: "NEW".into(),
			doc_type: "LP_INTRODUCE_GOODS".into(),
			import_request: true,
			owner_inn: "1234567891".into(),
			participant_inn: "0987654321".into(),
			producer_inn: "1234567896".into(),
			production_date: "2024-07-17".into(),
			production_type: "TYPE1".into(),
			products: vec![Product {
				certificate_document: "cert123".into(),
				certificate_document_date: "2024-07-15".into(),
				certificate_document_number: "certNumber".into(),
				owner_inn: "1234567890".into(),
				producer_inn: "1234567890".into(),
				production_date: "2024-07-18".into(),
				tnved_code: "123456".into(),
				uit_code: "uitCode123".into(),
				uitu_code: "uituCode123".into(),
			}],
			reg_date: "2024-07-18".into(),
			reg_number: "reg123".into(),
		}
	}

	#[test]
	fn wire_field_names_are_exact() {
		let value = serde_json::to_value(fixture()).expect("Document fixture should encode.");
		let object = value.as_object().expect("Document should encode as a JSON object.");

		for key in [
			"description",
			"doc_id",
			"doc_status",
			"doc_type",
			"importRequest",
			"owner_inn",
			"participant_inn",
			"producer_inn",
			"production_date",
			"production_type",
			"products",
			"reg_date",
			"reg_number",
		] {
			assert!(object.contains_key(key), "missing wire key `{key}`");
		}

		assert_eq!(value["description"]["participantInn"], json!("123456789"));
		assert_eq!(value["importRequest"], json!(true));
		assert_eq!(value["products"][0]["tnved_code"], json!("123456"));
		assert_eq!(value["products"][0]["uitu_code"], json!("uituCode123"));
	}
}
