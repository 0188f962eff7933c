#[cfg(test)]
mod tests {
    use reqwest::Client;

    use crate::client::{
        gen_client::{QuestionGenClient, strip_code_fences},
        gen_client_error::GenClientError,
    };

    #[test]
    fn bare_payloads_pass_through_fence_stripping() {
        assert_eq!(strip_code_fences("  [1, 2]  "), "[1, 2]");
    }

    #[test]
    fn json_fenced_payloads_are_unwrapped() {
        let fenced = "```json\n[{\"question\": \"q\"}]\n```";
        assert_eq!(strip_code_fences(fenced), "[{\"question\": \"q\"}]");
    }

    #[test]
    fn anonymous_fences_are_unwrapped() {
        let fenced = "```\n[]\n```";
        assert_eq!(strip_code_fences(fenced), "[]");
    }

    #[tokio::test]
    async fn an_empty_topic_is_rejected_before_any_request() {
        let gen_client = QuestionGenClient::new("http://localhost:1");
        let client = Client::new();

        let result = gen_client.generate_questions(&client, "   ", 3).await;
        assert!(matches!(result, Err(GenClientError::EmptyTopic)));
    }

    #[tokio::test]
    async fn out_of_bounds_counts_are_rejected_before_any_request() {
        let gen_client = QuestionGenClient::new("http://localhost:1");
        let client = Client::new();

        let zero = gen_client.generate_questions(&client, "AWS", 0).await;
        assert!(matches!(zero, Err(GenClientError::InvalidCount(0))));

        let too_many = gen_client.generate_questions(&client, "AWS", 50).await;
        assert!(matches!(too_many, Err(GenClientError::InvalidCount(50))));
    }
}
