use reqwest::{Client, Method, Response};
use std::future::Future;

use crate::config::RemoteConfig;
use crate::remote::error::TransportError;
use crate::vendor::{Vendor, VendorFields, VendorId};

/// Request/response access to the vendor collection.
///
/// Implementations make exactly one attempt per call: no retries, no
/// backoff, no timeout of their own.
pub trait VendorStore: Send + Sync + 'static {
    /// Fetch every record, in server order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Vendor>, TransportError>> + Send;

    /// Create a record; the store assigns its id.
    fn create(
        &self,
        fields: &VendorFields,
    ) -> impl Future<Output = Result<Vendor, TransportError>> + Send;

    /// Replace the record at `id` with `fields` in full.
    fn update(
        &self,
        id: &VendorId,
        fields: &VendorFields,
    ) -> impl Future<Output = Result<Vendor, TransportError>> + Send;

    /// Remove the record at `id`. Deleting an unknown id may fail.
    fn delete(&self, id: &VendorId) -> impl Future<Output = Result<(), TransportError>> + Send;
}

/// [`VendorStore`] over the HTTP/JSON CRUD resource.
pub struct HttpVendorStore {
    client: Client,
    collection_url: String,
}

impl HttpVendorStore {
    pub fn new(remote: &RemoteConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("vendor-desk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| TransportError::Client { source })?;

        Ok(Self {
            client,
            collection_url: remote.collection_url(),
        })
    }

    /// `{base_url}/{collection}`
    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn record_url(&self, id: &VendorId) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    async fn send(
        &self,
        method: Method,
        url: String,
        body: Option<&VendorFields>,
    ) -> Result<(Response, &'static str, String), TransportError> {
        let method_name = method_name(&method);
        tracing::debug!(method = method_name, %url, "remote request");

        let mut builder = self.client.request(method, &url);
        if let Some(fields) = body {
            builder = builder.json(fields);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| TransportError::Network {
                method: method_name,
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                method: method_name,
                url,
                status: status.as_u16(),
            });
        }

        Ok((response, method_name, url))
    }

    async fn send_for_vendor(
        &self,
        method: Method,
        url: String,
        fields: &VendorFields,
    ) -> Result<Vendor, TransportError> {
        let (response, method, url) = self.send(method, url, Some(fields)).await?;
        response
            .json::<Vendor>()
            .await
            .map_err(|source| TransportError::Decode {
                method,
                url,
                source,
            })
    }
}

impl VendorStore for HttpVendorStore {
    async fn list_all(&self) -> Result<Vec<Vendor>, TransportError> {
        let (response, method, url) = self
            .send(Method::GET, self.collection_url.clone(), None)
            .await?;
        let vendors = response
            .json::<Vec<Vendor>>()
            .await
            .map_err(|source| TransportError::Decode {
                method,
                url,
                source,
            })?;
        tracing::info!(count = vendors.len(), "fetched vendors");
        Ok(vendors)
    }

    async fn create(&self, fields: &VendorFields) -> Result<Vendor, TransportError> {
        let vendor = self
            .send_for_vendor(Method::POST, self.collection_url.clone(), fields)
            .await?;
        tracing::info!(id = %vendor.id, "created vendor");
        Ok(vendor)
    }

    async fn update(&self, id: &VendorId, fields: &VendorFields) -> Result<Vendor, TransportError> {
        let vendor = self
            .send_for_vendor(Method::PUT, self.record_url(id), fields)
            .await?;
        tracing::info!(id = %vendor.id, "updated vendor");
        Ok(vendor)
    }

    async fn delete(&self, id: &VendorId) -> Result<(), TransportError> {
        self.send(Method::DELETE, self.record_url(id), None).await?;
        tracing::info!(%id, "deleted vendor");
        Ok(())
    }
}

fn method_name(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "POST" => "POST",
        "PUT" => "PUT",
        "DELETE" => "DELETE",
        _ => "REQUEST",
    }
}
