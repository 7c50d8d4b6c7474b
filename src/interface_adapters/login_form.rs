use crate::domain::{AccountModel, Authentication, Credentials, Validation};

// Marker shown next to a field; red while it has an error.
pub const INDICATOR_ERROR: &str = "🔴";
pub const INDICATOR_OK: &str = "🟢";
// Title shown next to a valid field.
pub const STATUS_OK_TITLE: &str = "all good";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub const ALL: [LoginField; 2] = [LoginField::Email, LoginField::Password];

    // Name passed to the validation port.
    pub fn name(self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldStatus {
    pub title: String,
    pub indicator: &'static str,
}

/// Headless state of the login page.
///
/// Every field is validated as soon as it changes; submission goes through the
/// [`Authentication`] port once the form has no field errors. The form, not the
/// authentication use case, is what refuses a second submit while one is in
/// flight.
pub struct LoginForm<V> {
    validation: V,
    email: String,
    password: String,
    email_error: Option<String>,
    password_error: Option<String>,
    is_loading: bool,
    main_error: Option<String>,
}

impl<V> LoginForm<V>
where
    V: Validation,
{
    pub fn new(validation: V) -> Self {
        // Empty fields are validated up front so the initial state already
        // reports what is missing.
        let email_error = validation.validate(LoginField::Email.name(), "");
        let password_error = validation.validate(LoginField::Password.name(), "");

        Self {
            validation,
            email: String::new(),
            password: String::new(),
            email_error,
            password_error,
            is_loading: false,
            main_error: None,
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.email_error = self.validation.validate(LoginField::Email.name(), &self.email);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.password_error = self
            .validation
            .validate(LoginField::Password.name(), &self.password);
    }

    pub fn field_error(&self, field: LoginField) -> Option<&str> {
        match field {
            LoginField::Email => self.email_error.as_deref(),
            LoginField::Password => self.password_error.as_deref(),
        }
    }

    pub fn status(&self, field: LoginField) -> FieldStatus {
        match self.field_error(field) {
            Some(error) => FieldStatus {
                title: error.to_string(),
                indicator: INDICATOR_ERROR,
            },
            None => FieldStatus {
                title: STATUS_OK_TITLE.to_string(),
                indicator: INDICATOR_OK,
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn main_error(&self) -> Option<&str> {
        self.main_error.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading && self.email_error.is_none() && self.password_error.is_none()
    }

    /// Submit the current values. Returns the account on success; on failure
    /// the error message is kept in [`LoginForm::main_error`]. Does nothing
    /// while the form is invalid or a submission is already running.
    pub async fn submit<A>(&mut self, authentication: &A) -> Option<AccountModel>
    where
        A: Authentication + ?Sized,
    {
        if !self.can_submit() {
            tracing::debug!("login submit ignored; form is invalid or busy.");
            return None;
        }

        self.main_error = None;
        let loading = LoadingGuard::set(&mut self.is_loading);

        let credentials = Credentials::new(self.email.clone(), self.password.clone());
        let result = authentication.auth(credentials).await;
        drop(loading);

        match result {
            Ok(account) => {
                tracing::info!("login succeeded.");
                Some(account)
            }
            Err(err) => {
                tracing::warn!(error = %err, "login failed.");
                self.main_error = Some(err.to_string());
                None
            }
        }
    }
}

// Keeps the loading flag raised while a submission runs. Clearing happens on
// drop, so a submission future dropped mid-flight leaves the form usable.
struct LoadingGuard<'a>(&'a mut bool);

impl<'a> LoadingGuard<'a> {
    fn set(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
