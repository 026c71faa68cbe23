use tonic::Status;

use crate::domain::identity::models::UserId;
use crate::domain::identity::ports::AuthServicePort;
use crate::inbound::grpc::handlers::ParseRequestError;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;

pub async fn is_admin<S: AuthServicePort>(
    service: &S,
    request: IsAdminRequest,
) -> Result<IsAdminResponse, Status> {
    let user_id = UserId::new(request.user_id).map_err(ParseRequestError::from)?;
    let is_admin = service.is_admin(user_id).await?;

    Ok(IsAdminResponse { is_admin })
}
