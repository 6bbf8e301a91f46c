pub mod auth;
pub mod product;

pub use self::auth::{AuthDecision, AuthGateTrait, DynAuthGate};
pub use self::product::repository::{
    DynProductCommandRepository, DynProductQueryRepository, ProductCommandRepositoryTrait,
    ProductQueryRepositoryTrait,
};
