//! Tag-element codec: the second wire format.
//!
//! The element notation carries an identifier as the text content of a
//! single element; the absent value is the empty element. The strict and
//! permissive behaviors mirror the primary-format codecs: strict paths fail
//! on unknown identifiers, the permissive path captures them. Malformed
//! element payloads are propagated from the parser as
//! [`Error::Malformed`](crate::Error).

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::id::Id;
use crate::validated::Validated;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

/// Renders a single element named `tag` holding `text`. Empty text renders
/// as the empty element.
pub(crate) fn element(tag: &str, text: &str) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    if text.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(tag)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(tag)))?;
        writer.write_event(Event::Text(BytesText::new(text)))?;
        writer.write_event(Event::End(BytesEnd::new(tag)))?;
    }
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Extracts the text content of a single element payload. The empty element
/// yields the empty string.
pub(crate) fn element_text(payload: &str) -> Result<String> {
    let mut reader = Reader::from_str(payload);
    reader.config_mut().trim_text(true);

    let mut text = String::new();
    let mut saw_element = false;
    loop {
        match reader.read_event()? {
            Event::Start(_) | Event::Empty(_) => saw_element = true,
            Event::Text(fragment) => text.push_str(&fragment.unescape()?),
            Event::CData(fragment) => {
                text.push_str(&String::from_utf8_lossy(&fragment.into_inner()));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    if !saw_element {
        return Err(Error::Malformed("expected an element payload".to_owned()));
    }
    Ok(text)
}

impl<C: Catalog> Id<C> {
    /// Strict tag-element encode.
    ///
    /// The absent identifier renders as the empty element; an unknown
    /// non-empty identifier fails with
    /// [`INVALID_MARSHAL_ID`](crate::error::INVALID_MARSHAL_ID).
    pub fn to_xml(&self, tag: &str) -> Result<String> {
        if self.is_empty() {
            return element(tag, "");
        }
        match self.entry() {
            Some(entry) => element(tag, entry.id),
            None => Err(Error::invalid_marshal(C::NAME, self.as_str())),
        }
    }

    /// Strict tag-element decode.
    ///
    /// The empty element yields the absent identifier; unknown text fails
    /// with [`INVALID_UNMARSHAL_ID`](crate::error::INVALID_UNMARSHAL_ID).
    /// Decoding stores the catalog's canonical spelling.
    pub fn from_xml(payload: &str) -> Result<Self> {
        let text = element_text(payload)?;
        if text.is_empty() {
            return Ok(Self::empty());
        }
        match C::registry().by_id_string(&text) {
            Some(entry) => Ok(Self::canonical(entry)),
            None => Err(Error::invalid_unmarshal(C::NAME, &text)),
        }
    }
}

impl<C: Catalog> Validated<C> {
    /// Permissive tag-element encode: the inner identifier text as element
    /// content, or the empty element when the inner is absent.
    pub fn to_xml(&self, tag: &str) -> Result<String> {
        element(tag, self.to_id_string())
    }

    /// Permissive tag-element decode. Parser failures still surface;
    /// identifier validation never fails and is recorded in the wrapper.
    pub fn from_xml(payload: &str) -> Result<Self> {
        let text = element_text(payload)?;
        Ok(Self::from_fragment(&text))
    }
}

#[cfg(test)]
mod tests {
    use crate::data::account_domain::{AccountDomainId, ValidatedAccountDomainId};
    use crate::error::INVALID_UNMARSHAL_ID;

    #[test]
    fn strict_encode_renders_element_content() {
        let rendered = AccountDomainId::DIRECT.to_xml("AccountDomain").unwrap();
        assert_eq!(rendered, "<AccountDomain>direct</AccountDomain>");
    }

    #[test]
    fn strict_encode_renders_absent_as_empty_element() {
        let rendered = AccountDomainId::empty().to_xml("AccountDomain").unwrap();
        assert_eq!(rendered, "<AccountDomain/>");
    }

    #[test]
    fn strict_encode_fails_on_unknown_identifiers() {
        let error = AccountDomainId::new("bogus")
            .to_xml("AccountDomain")
            .unwrap_err();
        assert!(error.is_invalid_marshal());
    }

    #[test]
    fn strict_decode_round_trips_and_case_folds() {
        let id = AccountDomainId::from_xml("<AccountDomain>AGENCY</AccountDomain>").unwrap();
        assert_eq!(id, AccountDomainId::AGENCY);
        assert_eq!(id.as_str(), "agency");

        let absent = AccountDomainId::from_xml("<AccountDomain/>").unwrap();
        assert!(absent.is_empty());
    }

    #[test]
    fn strict_decode_fails_on_unknown_text() {
        let error = AccountDomainId::from_xml("<AccountDomain>bogus</AccountDomain>").unwrap_err();
        assert!(error.to_string().contains(INVALID_UNMARSHAL_ID));
    }

    #[test]
    fn strict_decode_rejects_non_element_payloads() {
        assert!(AccountDomainId::from_xml("just text").is_err());
    }

    #[test]
    fn permissive_decode_captures_unknown_text() {
        let wrapper =
            ValidatedAccountDomainId::from_xml("<AccountDomain>bogus</AccountDomain>").unwrap();
        assert!(!wrapper.is_valid());
        assert_eq!(wrapper.captured_value(), Some("bogus"));
        assert_eq!(wrapper.errors().len(), 1);
    }

    #[test]
    fn permissive_round_trip_for_valid_input() {
        let wrapper =
            ValidatedAccountDomainId::from_xml("<AccountDomain>direct</AccountDomain>").unwrap();
        assert!(wrapper.is_valid());

        let rendered = wrapper.to_xml("AccountDomain").unwrap();
        assert_eq!(rendered, "<AccountDomain>direct</AccountDomain>");

        let empty = ValidatedAccountDomainId::new().to_xml("AccountDomain").unwrap();
        assert_eq!(empty, "<AccountDomain/>");
    }
}
