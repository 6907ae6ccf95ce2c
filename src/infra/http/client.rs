use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::usecase::ports::backend::ApiError;

/// Cliente JSON sobre HTTP con token bearer. Cada método es una llamada
/// única: sin reintentos ni backoff; cualquier estado no exitoso se devuelve
/// tal cual como `ApiError::Estado`.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: &str, token: &str) -> Result<ApiClient, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| ApiError::Red(err.to_string()))?;
        Ok(ApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn url(&self, ruta: &str) -> String {
        format!("{}/{}", self.base_url, ruta.trim_start_matches('/'))
    }

    fn envia(&self, solicitud: RequestBuilder) -> Result<reqwest::blocking::Response, ApiError> {
        let respuesta = solicitud
            .bearer_auth(&self.token)
            .send()
            .map_err(|err| ApiError::Red(err.to_string()))?;

        let estado = respuesta.status();
        if !estado.is_success() {
            return Err(ApiError::Estado(estado.as_u16()));
        }
        Ok(respuesta)
    }

    pub fn get_json<T: DeserializeOwned>(&self, ruta: &str) -> Result<T, ApiError> {
        let respuesta = self.envia(self.http.get(self.url(ruta)))?;
        respuesta
            .json::<T>()
            .map_err(|err| ApiError::Decodificacion(err.to_string()))
    }

    pub fn post_json<B: Serialize + ?Sized>(&self, ruta: &str, cuerpo: &B) -> Result<(), ApiError> {
        self.envia(self.http.post(self.url(ruta)).json(cuerpo))?;
        Ok(())
    }

    pub fn put_json<B: Serialize + ?Sized>(&self, ruta: &str, cuerpo: &B) -> Result<(), ApiError> {
        self.envia(self.http.put(self.url(ruta)).json(cuerpo))?;
        Ok(())
    }

    pub fn delete(&self, ruta: &str) -> Result<(), ApiError> {
        self.envia(self.http.delete(self.url(ruta)))?;
        Ok(())
    }
}
