use std::{ops::Deref, sync::Arc};

///
/// Authenticated principal supplied by the identity provider.
///
/// To make sure cloning does not take too long
/// all fields are stored in InnerUser behind an Arc.
///
/// InnerUser fields are accessible thanks to Deref trait.
///
#[derive(Clone)]
pub struct User {
    inner: Arc<InnerUser>,
}

///
/// Principal information retrieved from the JWT.
///
pub struct InnerUser {
    pub subject_id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(subject_id: String, name: String, email: String) -> Self {
        Self {
            inner: Arc::new(InnerUser {
                subject_id,
                name,
                email,
            }),
        }
    }
}

impl Deref for User {
    type Target = InnerUser;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
