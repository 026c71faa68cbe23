use tonic::Status;

use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::Password;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::ports::AuthServicePort;
use crate::inbound::grpc::handlers::ParseRequestError;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<S: AuthServicePort>(
    service: &S,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    let user_id = service.register(request.try_into_command()?).await?;

    Ok(RegisterResponse { user_id: user_id.0 })
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ParseRequestError> {
        let password = Password::new(self.password)?;
        let email = EmailAddress::new(self.email)?;
        Ok(RegisterCommand::new(email, password))
    }
}
