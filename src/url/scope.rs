use crate::url::extract_domain;
use crate::UrlError;
use ::url::Url;

/// The region of a site a crawl is allowed to visit
///
/// Derived once from the seed URL and immutable for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeDescriptor {
    /// Host (with explicit port) of the seed
    pub domain: String,

    /// Path of the seed, matched as a literal string prefix
    pub path_prefix: String,
}

impl ScopeDescriptor {
    /// Builds the scope from a parsed seed URL
    pub fn from_seed(seed: &Url) -> Result<Self, UrlError> {
        let domain = extract_domain(seed).ok_or(UrlError::MissingDomain)?;
        Ok(Self {
            domain,
            path_prefix: seed.path().to_string(),
        })
    }

    /// Returns true if `candidate` may be enqueued
    ///
    /// Accepts iff the candidate's authority equals the seed's and its path
    /// starts with the seed path. The prefix test is on the raw string, so a
    /// `/blog` scope also admits `/blog-archive` and `/blog2`. Scheme and
    /// query are not considered.
    ///
    /// # Examples
    ///
    /// ```
    /// use url::Url;
    /// use site_crawler::url::ScopeDescriptor;
    ///
    /// let seed = Url::parse("https://ex.com/blog").unwrap();
    /// let scope = ScopeDescriptor::from_seed(&seed).unwrap();
    ///
    /// assert!(scope.accepts(&Url::parse("https://ex.com/blog/post1").unwrap()));
    /// assert!(scope.accepts(&Url::parse("https://ex.com/blog2").unwrap()));
    /// assert!(!scope.accepts(&Url::parse("https://ex.com/about").unwrap()));
    /// assert!(!scope.accepts(&Url::parse("https://other.com/blog").unwrap()));
    /// ```
    pub fn accepts(&self, candidate: &Url) -> bool {
        match extract_domain(candidate) {
            Some(domain) => {
                domain == self.domain && candidate.path().starts_with(&self.path_prefix)
            }
            None => false,
        }
    }
}
