use tonic::Status;

use crate::domain::identity::models::AppId;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::Password;
use crate::domain::identity::ports::AuthServicePort;
use crate::inbound::grpc::handlers::ParseRequestError;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<S: AuthServicePort>(
    service: &S,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    let token = service.login(request.try_into_command()?).await?;

    Ok(LoginResponse { token })
}

impl LoginRequest {
    fn try_into_command(self) -> Result<LoginCommand, ParseRequestError> {
        let password = Password::new(self.password)?;
        let email = EmailAddress::new(self.email)?;
        let app_id = AppId::new(self.app_id)?;
        Ok(LoginCommand::new(email, password, app_id))
    }
}
