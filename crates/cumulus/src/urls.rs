//! Client-side delivery URL templating.

use crate::MediaStore;
use cumulus_core::ResourceType;

impl MediaStore {
    /// Build a delivery URL for one asset. Pure templating, no request.
    ///
    /// Shape:
    /// `{scheme}://{host}/{cloud}/{resource_type}/upload[/{transformation}]/v{version}/{public_id}`
    ///
    /// # Examples
    ///
    /// ```
    /// use cumulus::{Credentials, MediaStore, ResourceType};
    ///
    /// let store = MediaStore::new(Credentials::new("demo", "key", "secret"));
    /// let url = store.delivery_url(
    ///     "gallery/sunset",
    ///     ResourceType::Image,
    ///     Some("w_300,h_300,c_fill"),
    ///     1700000001,
    ///     true,
    /// );
    /// assert_eq!(
    ///     url,
    ///     "https://res.cloudinary.com/demo/image/upload/w_300,h_300,c_fill/v1700000001/gallery/sunset",
    /// );
    /// ```
    pub fn delivery_url(
        &self,
        public_id: &str,
        resource_type: ResourceType,
        transformation: Option<&str>,
        version: u64,
        secure: bool,
    ) -> String {
        let scheme = if secure { "https" } else { "http" };
        let mut url = format!(
            "{}://{}/{}/{}/upload",
            scheme, self.delivery_base, self.credentials.cloud_name, resource_type
        );
        if let Some(t) = transformation.filter(|t| !t.is_empty()) {
            url.push('/');
            url.push_str(t);
        }
        url.push_str(&format!("/v{}/{}", version, public_id));
        url
    }
}

#[cfg(test)]
mod tests {
    use cumulus_core::{Credentials, ResourceType};

    use crate::MediaStore;

    fn store() -> MediaStore {
        MediaStore::new(Credentials::new("demo", "key", "secret"))
    }

    #[test]
    fn untransformed_url_has_no_empty_segment() {
        let url = store().delivery_url("gallery/sunset", ResourceType::Image, None, 7, false);
        assert_eq!(url, "http://res.cloudinary.com/demo/image/upload/v7/gallery/sunset");
    }

    #[test]
    fn transformation_sits_between_upload_and_version() {
        let url = store().delivery_url(
            "gallery/sunset",
            ResourceType::Video,
            Some("c_fill,w_100"),
            3,
            true,
        );
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/video/upload/c_fill,w_100/v3/gallery/sunset",
        );
    }
}
