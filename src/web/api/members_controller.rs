use crate::member::store::MemberStore;
use crate::member::validation::validate_new_member;
use crate::tools::log_message_and_return;
use crate::web::api::json_body::JsonBody;
use crate::web::api::member_id::MemberId;
use crate::web::error::ApiError;
use crate::web::error::ApiError::{Internal, MalformedBody, MemberNotFound, NotJson};
use dto::deletion::Deletion;
use dto::member::Member;
use log::{debug, info};
use rocket::State;
use rocket::http::ContentType;
use rocket::serde::json::{Json, Value};
use std::sync::{Mutex, MutexGuard};

type Result<T, E = ApiError> = std::result::Result<T, E>;

#[get("/members")]
pub async fn list_members(store: &State<Mutex<MemberStore>>) -> Result<Json<Vec<Member>>> {
    let store = lock(store)?;

    Ok(Json(store.get_all()))
}

#[get("/members/<id>")]
pub async fn get_member(id: MemberId, store: &State<Mutex<MemberStore>>) -> Result<Json<Member>> {
    let store = lock(store)?;

    id.get().and_then(|id| store.get(id)).map(Json).ok_or_else(|| {
        debug!("Member not found [id: {id}]");
        MemberNotFound
    })
}

/// Add a member to the family.
/// The body has to be a JSON object with at least `first_name`, `age` and `lucky_numbers`.
/// Return the stored member, along with its id.
#[post("/members", data = "<body>")]
pub async fn add_member(
    store: &State<Mutex<MemberStore>>,
    content_type: Option<&ContentType>,
    body: JsonBody,
) -> Result<Json<Member>> {
    if !content_type.is_some_and(is_json) {
        debug!("Member can't be added without a JSON body [content_type: {content_type:?}]");
        return Err(NotJson);
    }

    let body: Value = serde_json::from_slice(&body.into_inner()).map_err(|error| {
        debug!("Member can't be added from malformed JSON [error: {error}]");
        MalformedBody
    })?;
    let new_member = validate_new_member(body)
        .inspect_err(|error| debug!("Member has been rejected [error: {error:?}]"))?;

    let mut store = lock(store)?;
    let member = store
        .add(new_member)
        .inspect_err(|error| debug!("Member has been rejected [error: {error:?}]"))?;
    info!(
        "Member added [id: {}, members: {}]",
        member.id(),
        store.len()
    );

    Ok(Json(member))
}

#[delete("/members/<id>")]
pub async fn delete_member(
    id: MemberId,
    store: &State<Mutex<MemberStore>>,
) -> Result<Json<Deletion>> {
    let mut store = lock(store)?;

    if id.get().is_some_and(|id| store.delete(id)) {
        info!("Member deleted [id: {id}, members: {}]", store.len());
        Ok(Json(Deletion::new()))
    } else {
        debug!("Member not found [id: {id}]");
        Err(MemberNotFound)
    }
}

fn lock(store: &Mutex<MemberStore>) -> Result<MutexGuard<'_, MemberStore>> {
    store.lock().map_err(log_message_and_return(
        "Couldn't acquire members lock",
        Internal,
    ))
}

/// `application/json`, or any `application/*+json` media type.
fn is_json(content_type: &ContentType) -> bool {
    content_type.is_json()
        || (content_type.top() == "application" && content_type.sub().as_str().ends_with("+json"))
}
