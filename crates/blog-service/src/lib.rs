//! # blog-service
//!
//! Application layer containing business logic, services, and DTOs. The
//! comment gate and the daily breakdown aggregator live here.

pub mod dto;
pub mod services;

// Re-export commonly used request types
pub use dto::{
    CreateCommentRequest, CreatePostRequest, LoginRequest, RegisterRequest, UpdateCommentRequest,
    UpdatePostRequest,
};

// Re-export commonly used response types
pub use dto::{
    AuthResponse, BlockedCommentResponse, CommentResponse, ConfirmationResponse,
    CurrentUserResponse, DailyBreakdownResponse, DailyBucket, HealthResponse, PostResponse,
    ProfileResponse, ReadinessResponse,
};

// Re-export services
pub use services::{
    AnalyticsService, AuthService, CommentService, PostService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
