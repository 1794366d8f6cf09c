/// A raw, unnormalized search query as typed by the user.
#[derive(Debug)]
pub struct Query<'a>(&'a str);

impl<'a> Query<'a> {
    #[inline]
    pub fn new(value: &'a str) -> Self {
        Self(value)
    }

    /// Blank queries list every record.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl AsRef<str> for Query<'_> {
    #[inline]
    fn as_ref(&self) -> &str {
        self.0
    }
}
