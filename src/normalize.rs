//! Content normalizer: decoded payload documents → domain entities
//!
//! Validation is two-tiered. The document's overall shape is a hard
//! requirement: a tests payload must be a JSON object, a lectures payload a
//! non-empty JSON array, and anything else is a [`ResolveError::Shape`] that
//! sends the caller to the synthetic fallback. Field-level gaps inside a
//! structurally valid payload are repaired in place with documented
//! substitutions instead — partial real content beats discarding the batch.

use crate::error::ResolveError;
use crate::subjects::SUBJECTS;
use crate::synthesize;
use crate::types::{Lecture, LectureResource, Question, Test};
use chrono::Utc;
use rand::Rng;
use serde_json::Value;
use tracing::debug;

/// How many leading tests get the featured flag
const FEATURED_TEST_COUNT: usize = 3;

/// Build the tests dataset from a decoded payload document
///
/// One test per catalog subject, drawing question text, options, and answer
/// keys from the document's `questions` array where present and repairing
/// per-question gaps:
/// - options missing or not exactly 4 entries → placeholder option quad
/// - correct answer missing or outside [0,4) → random index
/// - question text missing → positional placeholder
///
/// Questions beyond the document's array come from the synthetic catalog.
///
/// # Errors
/// Returns [`ResolveError::Shape`] if the document is not a JSON object.
pub fn tests_from_document<R: Rng>(doc: &Value, rng: &mut R) -> Result<Vec<Test>, ResolveError> {
    if !doc.is_object() {
        return Err(ResolveError::Shape(
            "tests payload is not a JSON object".to_string(),
        ));
    }

    let remote_questions = doc
        .get("questions")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let created_at = Utc::now();
    let mut tests: Vec<Test> = SUBJECTS
        .iter()
        .enumerate()
        .map(|(index, subject)| {
            let id = format!("jee-test-{}", index + 1);
            let questions = (0..synthesize::QUESTIONS_PER_TEST)
                .map(|i| build_question(&id, subject, i, remote_questions.get(i), rng))
                .collect();

            Test {
                id,
                title: format!("JEE {subject} Practice Test"),
                description: format!(
                    "Comprehensive practice test for JEE Mains {subject} section."
                ),
                subject: subject.to_string(),
                questions,
                duration: synthesize::TEST_DURATION_MINUTES,
                total_marks: synthesize::TEST_TOTAL_MARKS,
                image_url: None,
                created_at,
                featured: false,
            }
        })
        .collect();

    let combined = synthesize::combined_test(&tests, created_at);
    tests.push(combined);

    for test in tests.iter_mut().take(FEATURED_TEST_COUNT) {
        test.featured = true;
    }

    Ok(tests)
}

/// One question, from remote data where available
fn build_question<R: Rng>(
    test_id: &str,
    subject: &str,
    index: usize,
    remote: Option<&Value>,
    rng: &mut R,
) -> Question {
    let (question, options, correct_answer) = match remote {
        Some(remote) => {
            let question = remote
                .get("question")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Question {} for {subject}", index + 1));

            let options = remote
                .get("options")
                .and_then(Value::as_array)
                .filter(|opts| opts.len() == 4)
                .map(|opts| {
                    opts.iter()
                        .map(|opt| {
                            opt.as_str()
                                .map(str::to_string)
                                .unwrap_or_else(|| format!("Option {index}"))
                        })
                        .collect()
                })
                .unwrap_or_else(|| {
                    debug!(test_id, index, "substituting placeholder options");
                    placeholder_options(index)
                });

            let correct_answer = remote
                .get("correct_answer")
                .and_then(Value::as_u64)
                .filter(|&n| n < 4)
                .map(|n| n as usize)
                .unwrap_or_else(|| {
                    debug!(test_id, index, "substituting random correct answer");
                    synthesize::random_correct_answer(rng)
                });

            (question, options, correct_answer)
        }
        None => (
            synthesize::catalog_prompt(subject, index).to_string(),
            synthesize::catalog_options(subject, index),
            synthesize::random_correct_answer(rng),
        ),
    };

    Question {
        id: format!("{}-q{}", test_id, index + 1),
        explanation: Some(format!("Explanation for {question}")),
        question,
        options,
        correct_answer,
        subject: subject.to_string(),
        difficulty: synthesize::random_difficulty(rng),
        marks: synthesize::QUESTION_MARKS,
        image_url: None,
    }
}

/// Placeholder option quad for a question whose remote options are unusable
fn placeholder_options(index: usize) -> Vec<String> {
    ["A", "B", "C", "D"]
        .iter()
        .map(|letter| format!("Option {letter} for question {}", index + 1))
        .collect()
}

/// Build the lectures dataset from a decoded payload document
///
/// Each array element maps to one [`Lecture`], with documented defaults for
/// missing optional fields (instructor, duration, rating, published date,
/// topics, description).
///
/// # Errors
/// Returns [`ResolveError::Shape`] if the document is not a non-empty JSON
/// array.
pub fn lectures_from_document<R: Rng>(
    doc: &Value,
    rng: &mut R,
) -> Result<Vec<Lecture>, ResolveError> {
    let entries = doc.as_array().ok_or_else(|| {
        ResolveError::Shape("lectures payload is not a JSON array".to_string())
    })?;
    if entries.is_empty() {
        return Err(ResolveError::Shape("lectures payload is empty".to_string()));
    }

    let today = Utc::now().format("%Y-%m-%d").to_string();
    let lectures = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| build_lecture(index, entry, &today, rng))
        .collect();

    Ok(lectures)
}

fn build_lecture<R: Rng>(index: usize, entry: &Value, today: &str, rng: &mut R) -> Lecture {
    let field = |name: &str| {
        entry
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let topics = entry
        .get("topics")
        .and_then(Value::as_array)
        .map(|topics| {
            topics
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|topics| !topics.is_empty())
        .unwrap_or_else(|| vec!["General Concepts".to_string()]);

    let resources = entry
        .get("resource")
        .and_then(Value::as_array)
        .map(|resources| {
            resources
                .iter()
                .filter_map(|res| {
                    Some(LectureResource {
                        kind: res.get("type")?.as_str()?.to_string(),
                        url: res.get("url")?.as_str()?.to_string(),
                        size: res.get("size").and_then(Value::as_str).map(str::to_string),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    Lecture {
        id: field("id").unwrap_or_else(|| format!("lecture-{}", index + 1)),
        title: field("title").unwrap_or_else(|| "JEE Preparation Lecture".to_string()),
        instructor: field("instructor").unwrap_or_else(|| "Expert Faculty".to_string()),
        duration: field("duration").unwrap_or_else(|| format!("{}:00", rng.gen_range(30..90))),
        subject: field("subject").unwrap_or_else(|| "General".to_string()),
        topics,
        description: field("description")
            .unwrap_or_else(|| "Comprehensive lecture for JEE preparation".to_string()),
        thumbnail: field("thumbnail"),
        video_url: field("videoUrl"),
        views: field("views"),
        rating: entry.get("rating").and_then(Value::as_f64).or(Some(4.5)),
        published_date: field("publishedDate").or_else(|| Some(today.to_string())),
        resources,
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(3)
    }

    #[test]
    fn builds_tests_from_remote_questions() {
        let doc = json!({
            "questions": [
                {
                    "question": "What is 2 + 2?",
                    "options": ["1", "2", "3", "4"],
                    "correct_answer": 3
                }
            ]
        });

        let tests = tests_from_document(&doc, &mut rng()).unwrap();
        assert_eq!(tests.len(), 5);

        // Remote question 0 lands in every subject test
        for test in &tests[..4] {
            let q = &test.questions[0];
            assert_eq!(q.question, "What is 2 + 2?");
            assert_eq!(q.options, ["1", "2", "3", "4"]);
            assert_eq!(q.correct_answer, 3);
            assert_eq!(q.subject, test.subject);
        }

        // Questions past the remote array come from the catalog
        let q19 = &tests[0].questions[19];
        assert_eq!(q19.question, synthesize::catalog_prompt("Mathematics", 19));
    }

    #[test]
    fn substitutes_placeholder_options_when_list_is_invalid() {
        let doc = json!({
            "questions": [
                { "question": "q1", "options": ["a", "b", "c", "d"], "correct_answer": 0 },
                { "question": "q2", "options": ["a", "b", "c", "d"], "correct_answer": 1 },
                { "question": "q3", "correct_answer": 2 },
                { "question": "q4", "options": ["only", "three", "given"], "correct_answer": 3 }
            ]
        });

        let tests = tests_from_document(&doc, &mut rng()).unwrap();
        let questions = &tests[0].questions;

        // The 3rd question omits options, the 4th has too few; both repaired
        assert_eq!(
            questions[2].options,
            [
                "Option A for question 3",
                "Option B for question 3",
                "Option C for question 3",
                "Option D for question 3"
            ]
        );
        assert_eq!(questions[3].options.len(), 4);
        assert!(questions[3].options[0].starts_with("Option A"));
        // Valid questions around them are untouched
        assert_eq!(questions[1].options, ["a", "b", "c", "d"]);
    }

    #[test]
    fn substitutes_random_answer_when_index_is_out_of_range() {
        let doc = json!({
            "questions": [
                { "question": "q1", "options": ["a", "b", "c", "d"], "correct_answer": 9 },
                { "question": "q2", "options": ["a", "b", "c", "d"], "correct_answer": -1 },
                { "question": "q3", "options": ["a", "b", "c", "d"] }
            ]
        });

        let tests = tests_from_document(&doc, &mut rng()).unwrap();
        for q in &tests[0].questions[..3] {
            assert!(q.correct_answer < 4);
        }
    }

    #[test]
    fn non_string_option_entries_become_placeholders() {
        let doc = json!({
            "questions": [
                { "question": "q1", "options": ["a", 2, "c", null], "correct_answer": 0 }
            ]
        });

        let tests = tests_from_document(&doc, &mut rng()).unwrap();
        let options = &tests[0].questions[0].options;
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], "a");
        assert_eq!(options[1], "Option 0");
        assert_eq!(options[3], "Option 0");
    }

    #[test]
    fn rejects_non_object_tests_payload() {
        for doc in [json!([1, 2, 3]), json!("nope"), json!(null), json!(42)] {
            assert!(matches!(
                tests_from_document(&doc, &mut rng()),
                Err(ResolveError::Shape(_))
            ));
        }
    }

    #[test]
    fn document_without_questions_still_yields_full_tests() {
        let tests = tests_from_document(&json!({}), &mut rng()).unwrap();
        assert_eq!(tests.len(), 5);
        for test in &tests[..4] {
            assert_eq!(test.questions.len(), synthesize::QUESTIONS_PER_TEST);
        }
    }

    #[test]
    fn builds_lectures_with_defaults_for_missing_fields() {
        let doc = json!([
            {
                "id": "vectors-101",
                "title": "Vectors",
                "instructor": "Dr. Kumar",
                "duration": "45:00",
                "subject": "Physics",
                "topics": ["Vectors"],
                "description": "Intro to vectors",
                "videoUrl": "https://example.com/v.mp4",
                "rating": 4.8,
                "publishedDate": "2023-05-01"
            },
            {}
        ]);

        let lectures = lectures_from_document(&doc, &mut rng()).unwrap();
        assert_eq!(lectures.len(), 2);

        let full = &lectures[0];
        assert_eq!(full.id, "vectors-101");
        assert_eq!(full.rating, Some(4.8));
        assert_eq!(full.video_url.as_deref(), Some("https://example.com/v.mp4"));

        let bare = &lectures[1];
        assert_eq!(bare.id, "lecture-2");
        assert_eq!(bare.title, "JEE Preparation Lecture");
        assert_eq!(bare.instructor, "Expert Faculty");
        assert_eq!(bare.subject, "General");
        assert_eq!(bare.topics, ["General Concepts"]);
        assert_eq!(bare.rating, Some(4.5));
        assert!(bare.duration.ends_with(":00"));
        assert!(bare.published_date.is_some());
        assert!(bare.video_url.is_none());
        assert!(bare.resources.is_empty());
    }

    #[test]
    fn parses_lecture_resources() {
        let doc = json!([
            {
                "id": "l1",
                "resource": [
                    { "type": "PDF", "url": "https://example.com/notes.pdf", "size": "2MB" },
                    { "type": "PDF" }
                ]
            }
        ]);

        let lectures = lectures_from_document(&doc, &mut rng()).unwrap();
        // Entries missing a url are dropped rather than guessed at
        assert_eq!(lectures[0].resources.len(), 1);
        assert_eq!(lectures[0].resources[0].size.as_deref(), Some("2MB"));
    }

    #[test]
    fn rejects_empty_or_non_array_lectures_payload() {
        assert!(matches!(
            lectures_from_document(&json!([]), &mut rng()),
            Err(ResolveError::Shape(_))
        ));
        assert!(matches!(
            lectures_from_document(&json!({"lectures": []}), &mut rng()),
            Err(ResolveError::Shape(_))
        ));
    }
}
