//! Ownership capability check shared by every mutating operation.

use uuid::Uuid;

use crate::error::DomainError;

/// How a non-owner's attempt on an existing resource is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    Forbidden,
    NotFound,
}

/// A resource that belongs to a single user.
pub trait Owned {
    /// Entity name used in error reporting.
    const ENTITY: &'static str;
    const DENIAL: Denial;

    fn owner_id(&self) -> Uuid;
}

/// Resolve a looked-up resource into one `actor` may perform `action` on.
///
/// A missing resource is always `NotFound`; an existing resource owned by
/// someone else is rejected according to `T::DENIAL`.
pub fn authorize<T: Owned>(
    resource: Option<T>,
    key: Uuid,
    actor: Uuid,
    action: &'static str,
) -> Result<T, DomainError> {
    let Some(resource) = resource else {
        return Err(DomainError::not_found(T::ENTITY, key));
    };

    if resource.owner_id() == actor {
        return Ok(resource);
    }

    tracing::debug!(
        entity = T::ENTITY,
        %key,
        %actor,
        action,
        "Ownership check denied"
    );

    match T::DENIAL {
        Denial::Forbidden => Err(DomainError::Forbidden {
            entity_type: T::ENTITY,
            action,
        }),
        Denial::NotFound => Err(DomainError::not_found(T::ENTITY, key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Blog, Comment};

    #[test]
    fn test_owner_is_authorized() {
        let owner = Uuid::new_v4();
        let blog = Blog::new(owner, "t".into(), "c".into()).unwrap();
        let id = blog.id;

        let authorized = authorize(Some(blog), id, owner, "edit").unwrap();
        assert_eq!(authorized.id, id);
    }

    #[test]
    fn test_missing_resource_is_not_found() {
        let id = Uuid::new_v4();
        let err = authorize::<Blog>(None, id, Uuid::new_v4(), "edit").unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity_type: "blog", .. }));
    }

    #[test]
    fn test_non_owner_of_blog_is_forbidden() {
        let blog = Blog::new(Uuid::new_v4(), "t".into(), "c".into()).unwrap();
        let id = blog.id;

        let err = authorize(Some(blog), id, Uuid::new_v4(), "delete").unwrap_err();
        assert!(matches!(
            err,
            DomainError::Forbidden {
                entity_type: "blog",
                action: "delete"
            }
        ));
    }

    #[test]
    fn test_non_author_of_comment_sees_not_found() {
        let comment = Comment::new(Uuid::new_v4(), Uuid::new_v4(), "nice".into()).unwrap();
        let id = comment.id;

        let err = authorize(Some(comment), id, Uuid::new_v4(), "delete").unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity_type: "comment", .. }));
    }
}
