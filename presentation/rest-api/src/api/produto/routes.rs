use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::auth::model::permissions;
use business::domain::produto::use_cases::create::{CreateProdutoParams, CreateProdutoUseCase};
use business::domain::produto::use_cases::delete::{DeleteProdutoParams, DeleteProdutoUseCase};
use business::domain::produto::use_cases::get_all::GetAllProdutosUseCase;
use business::domain::produto::use_cases::get_by_id::{
    GetProdutoByIdParams, GetProdutoByIdUseCase,
};
use business::domain::produto::use_cases::update::{UpdateProdutoParams, UpdateProdutoUseCase};
use business::domain::produto::use_cases::update_picture::{
    UpdateProdutoPictureParams, UpdateProdutoPictureUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::produto::dto::{
    CreateProdutoRequest, DeletedProdutoResponse, MessageResponse, ProdutoResponse,
    UpdateProdutoRequest, UploadPictureRequest,
};
use crate::api::security::{BearerAuth, require_permission};
use crate::api::tags::ApiTags;

pub struct ProdutoApi {
    create_use_case: Arc<dyn CreateProdutoUseCase>,
    get_all_use_case: Arc<dyn GetAllProdutosUseCase>,
    get_by_id_use_case: Arc<dyn GetProdutoByIdUseCase>,
    update_use_case: Arc<dyn UpdateProdutoUseCase>,
    update_picture_use_case: Arc<dyn UpdateProdutoPictureUseCase>,
    delete_use_case: Arc<dyn DeleteProdutoUseCase>,
}

impl ProdutoApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProdutoUseCase>,
        get_all_use_case: Arc<dyn GetAllProdutosUseCase>,
        get_by_id_use_case: Arc<dyn GetProdutoByIdUseCase>,
        update_use_case: Arc<dyn UpdateProdutoUseCase>,
        update_picture_use_case: Arc<dyn UpdateProdutoPictureUseCase>,
        delete_use_case: Arc<dyn DeleteProdutoUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            update_picture_use_case,
            delete_use_case,
        }
    }
}

/// Produtos resource
///
/// Reads are public; every mutation requires a bearer token carrying the
/// matching `products:*` permission.
#[OpenApi]
impl ProdutoApi {
    /// List all produtos
    ///
    /// Returns 204 with an empty body when the table has no rows.
    #[oai(path = "/produtos", method = "get", tag = "ApiTags::Produtos")]
    async fn get_all(&self) -> GetAllProdutosResponse {
        match self.get_all_use_case.execute().await {
            Ok(produtos) if produtos.is_empty() => GetAllProdutosResponse::NoContent,
            Ok(produtos) => GetAllProdutosResponse::Ok(Json(
                produtos.into_iter().map(|p| p.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProdutosResponse::InternalError(json)
            }
        }
    }

    /// Get a produto by id
    #[oai(path = "/produtos/:id", method = "get", tag = "ApiTags::Produtos")]
    async fn get_by_id(&self, id: Path<i32>) -> GetProdutoByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProdutoByIdParams { id: id.0 })
            .await
        {
            Ok(produto) => GetProdutoByIdResponse::Ok(Json(produto.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProdutoByIdResponse::NotFound(json),
                    _ => GetProdutoByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a produto
    #[oai(path = "/produtos", method = "post", tag = "ApiTags::Produtos")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<CreateProdutoRequest>,
    ) -> CreateProdutoResponse {
        if let Err(err) = require_permission(&auth.0, permissions::PRODUCTS_CREATE) {
            let (status, json) = err.into_error_response();
            return match status.as_u16() {
                401 => CreateProdutoResponse::Unauthorized(json),
                _ => CreateProdutoResponse::Forbidden(json),
            };
        }

        let params = CreateProdutoParams {
            external_id: body.0.external_id,
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
            category: body.0.category,
            picture_url: body.0.picture_url,
        };

        match self.create_use_case.execute(params).await {
            Ok(produto) => CreateProdutoResponse::Created(Json(produto.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProdutoResponse::BadRequest(json),
                    409 => CreateProdutoResponse::Conflict(json),
                    _ => CreateProdutoResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a produto
    ///
    /// Merge semantics: omitted fields keep their stored value.
    #[oai(path = "/produtos/:id", method = "put", tag = "ApiTags::Produtos")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UpdateProdutoRequest>,
    ) -> UpdateProdutoResponse {
        if let Err(err) = require_permission(&auth.0, permissions::PRODUCTS_UPDATE) {
            let (status, json) = err.into_error_response();
            return match status.as_u16() {
                401 => UpdateProdutoResponse::Unauthorized(json),
                _ => UpdateProdutoResponse::Forbidden(json),
            };
        }

        let params = UpdateProdutoParams {
            id: id.0,
            external_id: body.0.external_id,
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
            category: body.0.category,
            picture_url: body.0.picture_url,
        };

        match self.update_use_case.execute(params).await {
            Ok(produto) => UpdateProdutoResponse::Ok(Json(produto.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProdutoResponse::BadRequest(json),
                    404 => UpdateProdutoResponse::NotFound(json),
                    409 => UpdateProdutoResponse::Conflict(json),
                    _ => UpdateProdutoResponse::InternalError(json),
                }
            }
        }
    }

    /// Upload a produto picture
    ///
    /// Stores the file under the image directory as `<id>.<extension>` and
    /// persists the resulting path as the produto's pictureUrl.
    #[oai(
        path = "/produtos/:id/picture",
        method = "put",
        tag = "ApiTags::Produtos"
    )]
    async fn update_picture(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        payload: UploadPictureRequest,
    ) -> UpdatePictureResponse {
        if let Err(err) = require_permission(&auth.0, permissions::PRODUCTS_UPDATE) {
            let (status, json) = err.into_error_response();
            return match status.as_u16() {
                401 => UpdatePictureResponse::Unauthorized(json),
                _ => UpdatePictureResponse::Forbidden(json),
            };
        }

        let file_name = payload.file.file_name().unwrap_or_default().to_string();
        let bytes = match payload.file.into_vec().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("failed to read uploaded picture: {e}");
                return UpdatePictureResponse::InternalError(Json(ErrorResponse::new(
                    "produto.image_store_failed",
                )));
            }
        };

        let params = UpdateProdutoPictureParams {
            id: id.0,
            file_name,
            bytes,
        };

        match self.update_picture_use_case.execute(params).await {
            Ok(_) => UpdatePictureResponse::Ok(Json(MessageResponse {
                message: "Imagem salva com sucesso".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdatePictureResponse::BadRequest(json),
                    404 => UpdatePictureResponse::NotFound(json),
                    _ => UpdatePictureResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a produto
    #[oai(path = "/produtos/:id", method = "delete", tag = "ApiTags::Produtos")]
    async fn delete(&self, auth: BearerAuth, id: Path<i32>) -> DeleteProdutoResponse {
        if let Err(err) = require_permission(&auth.0, permissions::PRODUCTS_DELETE) {
            let (status, json) = err.into_error_response();
            return match status.as_u16() {
                401 => DeleteProdutoResponse::Unauthorized(json),
                _ => DeleteProdutoResponse::Forbidden(json),
            };
        }

        match self
            .delete_use_case
            .execute(DeleteProdutoParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteProdutoResponse::Ok(Json(DeletedProdutoResponse { id: id.0 })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProdutoResponse::NotFound(json),
                    _ => DeleteProdutoResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProdutosResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProdutoResponse>>),
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProdutoByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProdutoResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProdutoResponse {
    #[oai(status = 201)]
    Created(Json<ProdutoResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProdutoResponse {
    #[oai(status = 200)]
    Ok(Json<ProdutoResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdatePictureResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProdutoResponse {
    #[oai(status = 200)]
    Ok(Json<DeletedProdutoResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
