//! Domain Services
//!
//! Pure functions turning a [`DocumentRequest`] into an [`EditorConfig`].

use platform::uri::{encode_uri_with_specials, file_name, raw_query_pairs};

use crate::domain::entities::{
    Customization, DocumentRequest, DocumentSpec, EditorConfig, EditorSettings, EditorUser,
};
use crate::domain::value_objects::{CacheKey, FileType};
use crate::error::{OfficeError, OfficeResult};

/// Path of the save callback, relative to the public hostname
pub const CALLBACK_PATH: &str = "/onlyoffice/save";

/// Settings that do not depend on the request
#[derive(Debug, Clone, Copy)]
pub struct EditorDefaults<'a> {
    pub hostname: &'a str,
    pub lang: &'a str,
    pub autosave: bool,
}

/// `{file}?token={token}`, or `{file}` when there is no token
pub fn document_url(file: &str, token: Option<&str>) -> String {
    match token {
        Some(token) => format!("{file}?token={token}"),
        None => file.to_string(),
    }
}

/// `{hostname}/onlyoffice/save?file={file}&token={token}`
pub fn callback_url(hostname: &str, file: &str, token: Option<&str>) -> String {
    let mut url = format!(
        "{}{}?file={}",
        hostname.trim_end_matches('/'),
        CALLBACK_PATH,
        file
    );
    if let Some(token) = token {
        url.push_str("&token=");
        url.push_str(token);
    }
    url
}

/// `file` and `token` of a callback query built by [`callback_url`], still
/// percent-encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallbackTarget<'a> {
    pub file: Option<&'a str>,
    pub token: Option<&'a str>,
}

/// Split the query of a callback URL back into `file` and `token`
///
/// `file` keeps `encodeURI` output, so it may itself contain `&` and `=`.
/// It runs from `file=` up to the last `&token=`. Queries in any other
/// shape fall back to a plain `&` split.
pub fn parse_callback_query<'a>(query: &'a str) -> CallbackTarget<'a> {
    const TOKEN_SEPARATOR: &str = "&token=";
    let non_empty = |v: &'a str| Some(v).filter(|v| !v.is_empty());

    let Some(rest) = query.strip_prefix("file=") else {
        let pairs = raw_query_pairs(query);
        return CallbackTarget {
            file: pairs.get("file").copied(),
            token: pairs.get("token").copied(),
        };
    };

    match rest.rfind(TOKEN_SEPARATOR) {
        Some(index) => CallbackTarget {
            file: non_empty(&rest[..index]),
            token: non_empty(&rest[index + TOKEN_SEPARATOR.len()..]),
        },
        None => CallbackTarget {
            file: non_empty(rest),
            token: None,
        },
    }
}

/// Build the (unsigned) editor configuration for a request
///
/// `file` and `token` are percent-encoded once; the title and the cache key
/// use the raw file name.
pub fn build_editor_config(
    request: &DocumentRequest,
    defaults: EditorDefaults<'_>,
) -> OfficeResult<EditorConfig> {
    if request.file.trim().is_empty() {
        return Err(OfficeError::MissingParameter("file".to_string()));
    }

    let file = encode_uri_with_specials(&request.file);
    let token = request.token.as_deref().map(encode_uri_with_specials);
    let title = file_name(&request.file).to_string();
    let file_type = FileType::from_path(&file)
        .ok_or_else(|| OfficeError::UnsupportedFile(title.clone()))?;

    Ok(EditorConfig {
        document: DocumentSpec {
            key: CacheKey::derive(&title, &request.mtime),
            url: document_url(&file, token.as_deref()),
            file_type: file_type.clone(),
            title,
        },
        document_type: file_type.document_type(),
        editor_config: EditorSettings {
            lang: defaults.lang.to_string(),
            mode: file_type.editor_mode(),
            callback_url: callback_url(defaults.hostname, &file, token.as_deref()),
            customization: Customization {
                autosave: defaults.autosave,
            },
            user: EditorUser::named(&request.user),
        },
        token: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{DocumentType, EditorMode};

    fn defaults() -> EditorDefaults<'static> {
        EditorDefaults {
            hostname: "http://atrium.io:8080/",
            lang: "fr-FR",
            autosave: false,
        }
    }

    fn request(file: &str) -> DocumentRequest {
        DocumentRequest {
            file: file.to_string(),
            token: Some("share token!".to_string()),
            user: "alice".to_string(),
            mtime: "1700000000".to_string(),
        }
    }

    #[test]
    fn test_document_url() {
        assert_eq!(document_url("http://f/a.docx", Some("t")), "http://f/a.docx?token=t");
        assert_eq!(document_url("http://f/a.docx", None), "http://f/a.docx");
    }

    #[test]
    fn test_callback_url_trims_hostname() {
        assert_eq!(
            callback_url("http://atrium.io/", "http://f/a.docx", Some("t")),
            "http://atrium.io/onlyoffice/save?file=http://f/a.docx&token=t"
        );
        assert_eq!(
            callback_url("http://atrium.io", "http://f/a.docx", None),
            "http://atrium.io/onlyoffice/save?file=http://f/a.docx"
        );
    }

    #[test]
    fn test_parse_callback_query_inverts_callback_url() {
        let file = encode_uri_with_specials("http://dav.atrium.io/R&D/a=b plan.docx");
        let token = encode_uri_with_specials("t&k=1");
        let url = callback_url("http://atrium.io", &file, Some(&token));
        let (_, query) = url.split_once('?').unwrap();

        let target = parse_callback_query(query);
        assert_eq!(target.file, Some("http://dav.atrium.io/R&D/a=b%20plan.docx"));
        assert_eq!(target.token, Some("t&k=1"));

        let url = callback_url("http://atrium.io", &file, None);
        let (_, query) = url.split_once('?').unwrap();
        assert_eq!(
            parse_callback_query(query),
            CallbackTarget {
                file: Some("http://dav.atrium.io/R&D/a=b%20plan.docx"),
                token: None,
            }
        );
    }

    #[test]
    fn test_parse_callback_query_other_shapes() {
        assert_eq!(
            parse_callback_query("token=abc&file=http://f/a.docx"),
            CallbackTarget {
                file: Some("http://f/a.docx"),
                token: Some("abc"),
            }
        );
        assert_eq!(
            parse_callback_query("file=&token=abc"),
            CallbackTarget {
                file: None,
                token: Some("abc"),
            }
        );
        assert_eq!(
            parse_callback_query(""),
            CallbackTarget {
                file: None,
                token: None,
            }
        );
    }

    #[test]
    fn test_build_editor_config() {
        let config =
            build_editor_config(&request("http://dav.atrium.io/Docs/my report (v2).docx"), defaults())
                .unwrap();

        let encoded = "http://dav.atrium.io/Docs/my%20report%20%28v2%29.docx";
        assert_eq!(config.document.title, "my report (v2).docx");
        assert_eq!(config.document.file_type.as_str(), "docx");
        assert_eq!(config.document.url, format!("{encoded}?token=share%20token%21"));
        assert_eq!(
            config.document.key,
            CacheKey::derive("my report (v2).docx", "1700000000")
        );
        assert_eq!(config.document_type, DocumentType::Word);
        assert_eq!(config.editor_config.mode, EditorMode::Edit);
        assert_eq!(
            config.editor_config.callback_url,
            format!("http://atrium.io:8080/onlyoffice/save?file={encoded}&token=share%20token%21")
        );
        assert_eq!(config.editor_config.user, EditorUser::named("alice"));
        assert!(!config.editor_config.customization.autosave);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_view_mode_for_non_office_formats() {
        let config = build_editor_config(&request("http://dav.atrium.io/a.pdf"), defaults()).unwrap();
        assert_eq!(config.editor_config.mode, EditorMode::View);
        assert_eq!(config.document_type, DocumentType::Pdf);
    }

    #[test]
    fn test_missing_file_rejected() {
        let result = build_editor_config(&request("  "), defaults());
        assert!(matches!(result, Err(OfficeError::MissingParameter(p)) if p == "file"));
    }

    #[test]
    fn test_file_without_extension_rejected() {
        let result = build_editor_config(&request("http://dav.atrium.io/README"), defaults());
        assert!(matches!(result, Err(OfficeError::UnsupportedFile(name)) if name == "README"));
    }

    #[test]
    fn test_serialized_shape() {
        let config = build_editor_config(&request("http://dav.atrium.io/a.xlsx"), defaults()).unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["document"]["fileType"], "xlsx");
        assert_eq!(json["documentType"], "cell");
        assert_eq!(json["editorConfig"]["mode"], "edit");
        assert_eq!(json["editorConfig"]["lang"], "fr-FR");
        assert_eq!(json["editorConfig"]["customization"]["autosave"], false);
        assert_eq!(json["editorConfig"]["user"]["id"], "alice");
        assert!(json["editorConfig"]["callbackUrl"].is_string());
        assert!(json.get("token").is_none());
    }
}
