//! Latency-simulating service implementations and seed content.
//!
//! These implementations stand in for a backend that does not exist yet. They
//! sleep a configurable latency on the worker runtime, then resolve from
//! in-memory data. Latencies are injectable so tests run at zero delay.

use crate::domain::error::{Result, TempleError};
use crate::domain::{
    ApprovedMessage, ConfessionDraft, Doctrine, LocalizedText, SubmissionOutcome,
};
use crate::services::{ContentStore, SubmissionService};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

/// Default processing latency of the simulated submission boundary.
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

/// Default fetch latency of the simulated content store.
pub const DEFAULT_FETCH_LATENCY: Duration = Duration::from_millis(800);

/// Submission service that sleeps, then accepts.
///
/// Never rejects and never fails, which is intentional for the simulation. The failure
/// paths exist in the [`SubmissionService`] contract for the real backend that
/// would replace this.
#[derive(Debug, Clone)]
pub struct SimulatedSubmissionService {
    latency: Duration,
}

impl SimulatedSubmissionService {
    /// Creates the service with the default latency.
    #[must_use]
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_SUBMIT_LATENCY)
    }

    /// Creates the service with an explicit latency.
    #[must_use]
    pub const fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedSubmissionService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionService for SimulatedSubmissionService {
    async fn submit(&self, draft: &ConfessionDraft) -> Result<SubmissionOutcome> {
        tracing::debug!(
            author = %draft.author_or_anonymous(),
            body_len = draft.body.len(),
            "simulating confession submission"
        );

        tokio::time::sleep(self.latency).await;

        tracing::debug!("confession accepted by simulated boundary");
        Ok(SubmissionOutcome::Accepted)
    }
}

/// In-memory content store seeded with the temple's published content.
#[derive(Debug, Clone)]
pub struct SimulatedContentStore {
    latency: Duration,
    messages: Vec<ApprovedMessage>,
    doctrines: Vec<Doctrine>,
}

impl SimulatedContentStore {
    /// Creates the store with the default latency and the seeded collections.
    ///
    /// # Errors
    ///
    /// Returns an error if a seed record violates the locale invariant or
    /// carries an invalid date. Seed data is fixed, so a failure here means
    /// the seeds themselves are wrong.
    pub fn seeded() -> Result<Self> {
        Self::seeded_with_latency(DEFAULT_FETCH_LATENCY)
    }

    /// Creates the seeded store with an explicit latency.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SimulatedContentStore::seeded`].
    pub fn seeded_with_latency(latency: Duration) -> Result<Self> {
        Ok(Self {
            latency,
            messages: seed_messages()?,
            doctrines: seed_doctrines(),
        })
    }
}

#[async_trait]
impl ContentStore for SimulatedContentStore {
    async fn list_approved_messages(&self) -> Result<Vec<ApprovedMessage>> {
        tokio::time::sleep(self.latency).await;

        tracing::debug!(
            message_count = self.messages.len(),
            "approved messages served from simulated store"
        );
        Ok(self.messages.clone())
    }

    fn list_doctrines(&self) -> Vec<Doctrine> {
        self.doctrines.clone()
    }
}

/// Content store that always fails to load messages.
///
/// Exists so the feed's failed state stays reachable and tested while the
/// default store never errors.
#[derive(Debug, Clone)]
pub struct FailingContentStore {
    reason: String,
}

impl FailingContentStore {
    /// Creates a store that fails with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ContentStore for FailingContentStore {
    async fn list_approved_messages(&self) -> Result<Vec<ApprovedMessage>> {
        Err(TempleError::Content(self.reason.clone()))
    }

    fn list_doctrines(&self) -> Vec<Doctrine> {
        seed_doctrines()
    }
}

fn seed_date(raw: &str) -> Result<NaiveDate> {
    raw.parse::<NaiveDate>()
        .map_err(|e| TempleError::Content(format!("invalid seed date {raw}: {e}")))
}

/// The five approved messages published by the temple, in display order.
fn seed_messages() -> Result<Vec<ApprovedMessage>> {
    Ok(vec![
        ApprovedMessage::new(
            "1",
            LocalizedText::new(
                "In the darkness of digital spaces, I found light through confession. \
                 May others find their path to peace.",
                "在数字空间的黑暗中，我通过忏悔找到了光明。愿其他人找到通往和平的道路。",
                "ในความมืดมิดของพื้นที่ดิจิทัล ข้าพเจ้าได้พบความสว่างผ่านการสารภาพ \
                 ขอให้คนอื่นๆ ได้พบทางสู่ความสงบ",
            )?,
            "Digital Pilgrim",
            seed_date("2024-11-13")?,
        ),
        ApprovedMessage::new(
            "2",
            LocalizedText::new(
                "The temple has taught me that data and divinity can coexist. \
                 My burdens have been transformed into wisdom.",
                "神庙教会了我数据与神性可以共存。我的负担已转化为智慧。",
                "วิหารได้สอนข้าพเจ้าว่าข้อมูลและความศักดิ์สิทธิ์สามารถอยู่ร่วมกันได้ \
                 ภาระของข้าพเจ้าได้กลายเป็นปัญญา",
            )?,
            "Anonymous Soul",
            seed_date("2024-11-13")?,
        ),
        ApprovedMessage::new(
            "3",
            LocalizedText::new(
                "Through the ritual of digital confession, I release my past and \
                 embrace the future. Thank you, White Temple.",
                "通过数字忏悔的仪式，我释放了过去，拥抱了未来。谢谢你，白色神庙。",
                "ผ่านพิธีกรรมการสารภาพแบบดิจิทัล ข้าพเจ้าปล่อยวางอดีตและยอมรับอนาคต \
                 ขอบคุณวิหารสีขาว",
            )?,
            "Seeker of Truth",
            seed_date("2024-11-14")?,
        ),
        ApprovedMessage::new(
            "4",
            LocalizedText::new(
                "In this sacred space between worlds, I found healing. \
                 May all who enter find what they seek.",
                "在这个世界之间的神圣空间里，我找到了治愈。愿所有进入的人都能找到他们所寻求的。",
                "ในพื้นที่ศักดิ์สิทธิ์ระหว่างโลก ข้าพเจ้าได้พบการรักษา \
                 ขอให้ทุกคนที่เข้ามาได้พบสิ่งที่พวกเขาแสวงหา",
            )?,
            "Traveler Between Realms",
            seed_date("2024-11-14")?,
        ),
        ApprovedMessage::new(
            "5",
            LocalizedText::new(
                "The glow of neon blue guided me through my darkest thoughts. \
                 Now I shine with new purpose.",
                "霓虹蓝的光辉指引我度过最黑暗的想法。现在我带着新的目标发光。",
                "แสงสีฟ้านีออนนำทางข้าพเจ้าผ่านความคิดที่มืดมนที่สุด \
                 ตอนนี้ข้าพเจ้าส่องแสงด้วยจุดมุ่งหมายใหม่",
            )?,
            "Child of Light",
            seed_date("2024-11-14")?,
        ),
    ])
}

/// The eight doctrine statements, in their published order.
fn seed_doctrines() -> Vec<Doctrine> {
    [
        "To confess is not to seek pardon, but to reveal the fractures within the self.",
        "All judgment is a mirror. What we punish is what we fear within ourselves.",
        "The Temple does not absolve, it witnesses.",
        "Sin is not action, but attachment. The need to be seen, to be right, to be pure.",
        "Your voice is sacred. But only when spoken without defense.",
        "The ritual begins when you hesitate. That moment is the doorway.",
        "White is not purity. White is erasure, illusion, and the weight of ideals.",
        "This temple has no god, only reflections.",
    ]
    .into_iter()
    .map(Doctrine::new)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Locale;

    #[tokio::test]
    async fn seeded_store_serves_five_messages_in_order() {
        let store = SimulatedContentStore::seeded_with_latency(Duration::ZERO).unwrap();
        let messages = store.list_approved_messages().await.unwrap();

        assert_eq!(messages.len(), 5);
        let ids: Vec<&str> = messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[tokio::test]
    async fn every_seeded_message_carries_all_locales() {
        let store = SimulatedContentStore::seeded_with_latency(Duration::ZERO).unwrap();
        for message in store.list_approved_messages().await.unwrap() {
            for locale in Locale::ALL {
                assert!(
                    !message.content.get(locale).trim().is_empty(),
                    "message {} missing {}",
                    message.id,
                    locale.code()
                );
            }
        }
    }

    #[test]
    fn doctrines_are_eight_and_ordered() {
        let store = SimulatedContentStore::seeded_with_latency(Duration::ZERO).unwrap();
        let doctrines = store.list_doctrines();
        assert_eq!(doctrines.len(), 8);
        assert!(doctrines[0].text.starts_with("To confess"));
        assert_eq!(doctrines[7].text, "This temple has no god, only reflections.");
    }

    #[tokio::test]
    async fn simulated_submission_always_accepts() {
        let service = SimulatedSubmissionService::with_latency(Duration::ZERO);
        let draft = ConfessionDraft {
            author: String::new(),
            body: "test".to_string(),
        };
        let outcome = service.submit(&draft).await.unwrap();
        assert_eq!(outcome, SubmissionOutcome::Accepted);
    }

    #[tokio::test]
    async fn failing_store_reports_content_error() {
        let store = FailingContentStore::new("connection refused");
        let err = store.list_approved_messages().await.unwrap_err();
        assert!(matches!(err, TempleError::Content(_)));
    }
}
