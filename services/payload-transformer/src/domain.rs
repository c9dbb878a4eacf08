// Domain layer modules
pub mod transform_event;
pub mod transform_result;

// Re-exports
pub use transform_event::{EventError, TransformEvent};
pub use transform_result::{
    LambdaTransformPayload, ResponseEnvelope, TransformResult, LAMBDA_TRANSFORM_MESSAGE,
};
