use http::StatusCode;

/// Invokes `$callback!` with the full category table.
///
/// Each entry is `(Variant, method_name, code, STATUS_CONST, "Reason Phrase")`.
macro_rules! with_categories {
    ($callback:ident) => {
        $callback! {
            (NotModified, not_modified, 304, NOT_MODIFIED, "Not Modified"),
            (BadRequest, bad_request, 400, BAD_REQUEST, "Bad Request"),
            (Unauthorized, unauthorized, 401, UNAUTHORIZED, "Unauthorized"),
            (PaymentRequired, payment_required, 402, PAYMENT_REQUIRED, "Payment Required"),
            (Forbidden, forbidden, 403, FORBIDDEN, "Forbidden"),
            (NotFound, not_found, 404, NOT_FOUND, "Not Found"),
            (MethodNotAllowed, method_not_allowed, 405, METHOD_NOT_ALLOWED, "Method Not Allowed"),
            (NotAcceptable, not_acceptable, 406, NOT_ACCEPTABLE, "Not Acceptable"),
            (ProxyAuthRequired, proxy_auth_required, 407, PROXY_AUTHENTICATION_REQUIRED, "Proxy Authentication Required"),
            (Conflict, conflict, 409, CONFLICT, "Conflict"),
            (Gone, gone, 410, GONE, "Gone"),
            (LengthRequired, length_required, 411, LENGTH_REQUIRED, "Length Required"),
            (PreconditionFailed, precondition_failed, 412, PRECONDITION_FAILED, "Precondition Failed"),
            (RequestEntityTooLarge, request_entity_too_large, 413, PAYLOAD_TOO_LARGE, "Request Entity Too Large"),
            (RequestURITooLong, request_uri_too_long, 414, URI_TOO_LONG, "Request URI Too Long"),
            (UnsupportedMediaType, unsupported_media_type, 415, UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type"),
            (RequestedRangeNotSatisfiable, requested_range_not_satisfiable, 416, RANGE_NOT_SATISFIABLE, "Requested Range Not Satisfiable"),
            (ExpectationFailed, expectation_failed, 417, EXPECTATION_FAILED, "Expectation Failed"),
            (BadData, bad_data, 422, UNPROCESSABLE_ENTITY, "Unprocessable Entity"),
            (Locked, locked, 423, LOCKED, "Locked"),
            (FailedDependency, failed_dependency, 424, FAILED_DEPENDENCY, "Failed Dependency"),
            (TooEarly, too_early, 425, TOO_EARLY, "Too Early"),
            (UpgradeRequired, upgrade_required, 426, UPGRADE_REQUIRED, "Upgrade Required"),
            (PreconditionRequired, precondition_required, 428, PRECONDITION_REQUIRED, "Precondition Required"),
            (RequestHeaderFieldsTooLarge, request_header_fields_too_large, 431, REQUEST_HEADER_FIELDS_TOO_LARGE, "Request Header Fields Too Large"),
            (UnavailableForLegalReasons, unavailable_for_legal_reasons, 451, UNAVAILABLE_FOR_LEGAL_REASONS, "Unavailable For Legal Reasons"),
            (InternalServerError, internal_server_error, 500, INTERNAL_SERVER_ERROR, "Internal Server Error"),
            (NotImplemented, not_implemented, 501, NOT_IMPLEMENTED, "Not Implemented"),
            (ServiceUnavailable, service_unavailable, 503, SERVICE_UNAVAILABLE, "Service Unavailable"),
            (GatewayTimeout, gateway_timeout, 504, GATEWAY_TIMEOUT, "Gateway Timeout"),
            (HTTPVersionNotSupported, http_version_not_supported, 505, HTTP_VERSION_NOT_SUPPORTED, "HTTP Version Not Supported"),
            (VariantAlsoNegotiates, variant_also_negotiates, 506, VARIANT_ALSO_NEGOTIATES, "Variant Also Negotiates"),
            (InsufficientStorage, insufficient_storage, 507, INSUFFICIENT_STORAGE, "Insufficient Storage"),
            (LoopDetected, loop_detected, 508, LOOP_DETECTED, "Loop Detected"),
            (NotExtended, not_extended, 510, NOT_EXTENDED, "Not Extended"),
            (NetworkAuthenticationRequired, network_authentication_required, 511, NETWORK_AUTHENTICATION_REQUIRED, "Network Authentication Required"),
        }
    };
}

pub(crate) use with_categories;

macro_rules! define_category {
    ($(($variant:ident, $method:ident, $code:literal, $status:ident, $phrase:literal)),* $(,)?) => {
        /// Error categories, each bound to one fixed status code.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Category {
            $(
                #[doc = concat!(stringify!($code), " ", $phrase)]
                $variant,
            )*
        }

        impl Category {
            pub const ALL: &'static [Category] = &[$(Category::$variant),*];

            pub const fn code(self) -> u16 {
                match self {
                    $(Category::$variant => $code,)*
                }
            }

            /// Conventional name, e.g. `"BadData"` for 422.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Category::$variant => stringify!($variant),)*
                }
            }

            pub const fn status(self) -> StatusCode {
                match self {
                    $(Category::$variant => StatusCode::$status,)*
                }
            }

            pub const fn reason_phrase(self) -> &'static str {
                match self {
                    $(Category::$variant => $phrase,)*
                }
            }

            pub fn from_status(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(Category::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

with_categories!(define_category);

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.reason_phrase())
    }
}
