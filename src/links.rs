//! Outbound contact URIs. Everything here is pure string building; the
//! host browser decides which app handles `tel:`, `mailto:` and `https:`.

pub const DEFAULT_MESSAGE: &str = "Hello! I'm interested in a Body Fat Analysis.";

/// WhatsApp deep link with a pre-filled chat message.
///
/// `destination` is the number in international format without `+` or
/// spaces (`919302559659`). It is not validated: a malformed number still
/// yields a well-formed URI, it just won't open a chat.
pub fn messaging_link(destination: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        destination,
        urlencoding::encode(message)
    )
}

pub fn default_messaging_link(destination: &str) -> String {
    messaging_link(destination, DEFAULT_MESSAGE)
}

pub fn telephone_link(destination: &str) -> String {
    format!("tel:{}", destination)
}

pub fn email_link(address: &str) -> String {
    format!("mailto:{}", address)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_text(link: &str) -> String {
        let (_, encoded) = link.split_once("?text=").expect("text parameter");
        urlencoding::decode(encoded).expect("utf-8").into_owned()
    }

    #[test]
    fn plain_message_is_left_alone() {
        assert_eq!(
            messaging_link("919302559659", "Hi"),
            "https://wa.me/919302559659?text=Hi"
        );
    }

    #[test]
    fn space_and_ampersand_are_escaped_and_round_trip() {
        let message = "Salt & pepper diet?";
        let link = messaging_link("919302559659", message);
        assert_eq!(
            link,
            "https://wa.me/919302559659?text=Salt%20%26%20pepper%20diet%3F"
        );
        assert_eq!(query_text(&link), message);
    }

    #[test]
    fn non_ascii_is_utf8_percent_encoded() {
        let message = "Namaste, I want to book a 3\u{2011}day trial. नमस्ते";
        let link = messaging_link("919302559659", message);
        assert!(link.is_ascii());
        assert!(link.contains("%E2%80%91"));
        assert_eq!(query_text(&link), message);
    }

    #[test]
    fn default_message_is_used_when_none_given() {
        let link = default_messaging_link("919302559659");
        assert_eq!(query_text(&link), DEFAULT_MESSAGE);
    }

    #[test]
    fn malformed_destination_passes_through() {
        let link = messaging_link("+91 93025", "Hi");
        assert_eq!(link, "https://wa.me/+91 93025?text=Hi");
    }

    #[test]
    fn telephone_and_email_schemes() {
        assert_eq!(telephone_link("9302559659"), "tel:9302559659");
        assert_eq!(email_link("coach@vedprakash.fit"), "mailto:coach@vedprakash.fit");
    }
}
