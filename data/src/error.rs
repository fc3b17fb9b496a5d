/// Everything that can go wrong while turning one wiki page into a weapon record.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The page could not be fetched (network error, timeout, non-2xx status).
	#[error("fetch {url}: {source}")]
	Fetch {
		url: String,
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},

	/// An element the extractor depends on is not on the page.
	#[error("missing {0}")]
	Absent(&'static str),

	/// The element is there but its content can't be read.
	#[error("malformed {what}: {detail}")]
	Malformed {
		what: &'static str,
		detail: String,
	},

	#[error("invalid selector `{0}`")]
	Selector(String),
}

impl Error {
	pub fn fetch(url: impl Into<String>, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
		Self::Fetch {
			url: url.into(),
			source: source.into(),
		}
	}

	pub fn malformed(what: &'static str, detail: impl Into<String>) -> Self {
		Self::Malformed {
			what,
			detail: detail.into(),
		}
	}
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
