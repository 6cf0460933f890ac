use actix_files::HttpRange;
use actix_multipart::MultipartError;
use actix_multipart::form::{MultipartForm, bytes::Bytes, text::Text};
use actix_session::Session;
use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use payloads::responses::UploadResponse;
use payloads::{BookRecord, FileId};

use crate::store::{LIST_PAGE_SIZE, Library, StoredFile};

use super::{APIError, require_credentials};

/// Fallback when the upload carries no title part.
const DEFAULT_TITLE: &str = "Untitled";

/// Content type that says nothing about the file; sniffed instead.
const OCTET_STREAM: &str = "application/octet-stream";

#[derive(MultipartForm)]
pub struct UploadForm {
    pub title: Option<Text<String>>,
    pub file: Option<Bytes>,
}

#[tracing::instrument(skip(request, session, library))]
#[get("/books")]
pub async fn list_books(
    request: HttpRequest,
    session: Session,
    library: web::Data<Library>,
) -> Result<HttpResponse, APIError> {
    require_credentials(&session)?;

    let books = library
        .list(LIST_PAGE_SIZE)
        .await
        .iter()
        .map(|file| book_record(&request, file))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HttpResponse::Ok().json(books))
}

#[tracing::instrument(
    skip(session, library, form),
    fields(title = tracing::field::Empty)
)]
#[post("/upload")]
pub async fn upload(
    session: Session,
    library: web::Data<Library>,
    MultipartForm(form): MultipartForm<UploadForm>,
) -> Result<HttpResponse, APIError> {
    require_credentials(&session)?;

    let file = form
        .file
        .ok_or_else(|| APIError::bad_request("No file part in the request"))?;
    if file.file_name.as_deref().unwrap_or_default().is_empty() {
        return Err(APIError::bad_request("No selected file"));
    }

    let title = form
        .title
        .map(Text::into_inner)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    tracing::Span::current().record("title", tracing::field::display(&title));

    let content_type = file
        .content_type
        .map(|mime| mime.to_string())
        .filter(|mime| mime != OCTET_STREAM);
    let file_id = library.insert(title, content_type, file.data).await;
    tracing::info!(%file_id, "Book uploaded");

    Ok(HttpResponse::Ok().json(UploadResponse::succeeded(file_id)))
}

/// Serve a stored file. Honors a single byte range so audio players can
/// seek.
#[tracing::instrument(skip(request, library))]
#[get("/media/{file_id}", name = "media")]
pub async fn media(
    request: HttpRequest,
    file_id: web::Path<String>,
    library: web::Data<Library>,
) -> Result<HttpResponse, APIError> {
    let file = library.get(&FileId(file_id.into_inner())).await?;
    let content_type = file
        .content_type
        .or_else(|| {
            infer::get(&file.data).map(|kind| kind.mime_type().to_string())
        })
        .unwrap_or_else(|| OCTET_STREAM.to_string());
    let total = file.data.len() as u64;

    let Some(range) = request
        .headers()
        .get(header::RANGE)
        .and_then(|value| value.to_str().ok())
    else {
        return Ok(HttpResponse::Ok()
            .content_type(content_type)
            .insert_header((header::ACCEPT_RANGES, "bytes"))
            .body(file.data));
    };

    // Multiple ranges are answered with the first one only
    let Some(range) = HttpRange::parse(range, total)
        .ok()
        .and_then(|ranges| ranges.into_iter().next())
    else {
        return Ok(HttpResponse::build(StatusCode::RANGE_NOT_SATISFIABLE)
            .insert_header((header::CONTENT_RANGE, format!("bytes */{total}")))
            .finish());
    };

    let start = range.start as usize;
    let end = start + range.length as usize;
    Ok(HttpResponse::PartialContent()
        .content_type(content_type)
        .insert_header((header::ACCEPT_RANGES, "bytes"))
        .insert_header((
            header::CONTENT_RANGE,
            format!("bytes {start}-{}/{total}", end - 1),
        ))
        .body(file.data.slice(start..end)))
}

/// Render malformed multipart bodies as JSON errors, like every other
/// failure.
pub fn multipart_error(
    e: MultipartError,
    _request: &HttpRequest,
) -> actix_web::Error {
    APIError::BadRequest(anyhow::anyhow!("Invalid upload: {e}")).into()
}

fn book_record(
    request: &HttpRequest,
    file: &StoredFile,
) -> Result<BookRecord, APIError> {
    let link = request
        .url_for("media", [file.id.to_string()])
        .map_err(|e| anyhow::anyhow!("Couldn't build media link: {e}"))?;
    Ok(BookRecord {
        id: Some(file.id.clone()),
        name: file.name.clone(),
        web_content_link: Some(link.to_string()),
    })
}
