//! The built-in checklist for the Hugging Face MCP server

use super::{Check, Gate, ManualCheck};

pub const BASIC_INTEGRATION: &str = "Basic MCP Integration";
pub const MODEL_SEARCH: &str = "Model Search";
pub const MODEL_INFO: &str = "Model Information";
pub const DATASET_SEARCH: &str = "Dataset Search";
pub const INFERENCE: &str = "Text Generation Inference";
pub const SPACES_SEARCH: &str = "Spaces Search";
pub const ERROR_HANDLING: &str = "Error Handling";
pub const COMPREHENSIVE: &str = "Comprehensive Test";

/// All checks in execution order, with instructions addressed to `client`
pub fn catalog(client: &str) -> Vec<Box<dyn Check>> {
    let client = client.to_string();
    let checks = vec![
        ManualCheck {
            name: BASIC_INTEGRATION,
            description: "Check if the chat client can communicate with the MCP server",
            instructions: &[
                "This test requires manual verification in {client}.",
                "Please try the following in {client}'s chat:",
                "",
                "1. Type: 'Can you search for popular text generation models on Hugging Face?'",
                "2. You should see the MCP server respond with model search results",
                "3. Look for JSON formatted results with model information",
                "",
            ],
            gate: None,
            question: "Did {client} respond with Hugging Face model search results?",
            on_pass: "Basic MCP integration is working!",
            on_fail: "MCP server may not be properly connected",
            fail_advice: &["Check your {client} MCP configuration"],
            client: client.clone(),
        },
        ManualCheck {
            name: MODEL_SEARCH,
            description: "Test searching for specific models",
            instructions: &[
                "Try these queries in {client} one by one:",
                "1. Search for BERT models on Hugging Face",
                "2. Find the most popular GPT models",
                "3. Look for image classification models",
                "4. Search for models with 'sentiment' in the name",
                "",
            ],
            gate: None,
            question: "Did all queries return relevant model results?",
            on_pass: "Model search functionality is working!",
            on_fail: "Model search may have issues",
            fail_advice: &[],
            client: client.clone(),
        },
        ManualCheck {
            name: MODEL_INFO,
            description: "Test getting detailed model information",
            instructions: &[
                "Try this query in {client}:",
                "'Get detailed information about the model bert-base-uncased'",
                "",
                "Expected response should include:",
                "- Model ID, author, downloads, likes",
                "- Tags, pipeline_tag, library_name",
                "- Created/updated dates",
                "- Configuration details",
                "",
            ],
            gate: None,
            question: "Did you get detailed model information?",
            on_pass: "Model information retrieval is working!",
            on_fail: "Model information retrieval may have issues",
            fail_advice: &[],
            client: client.clone(),
        },
        ManualCheck {
            name: DATASET_SEARCH,
            description: "Test searching for datasets",
            instructions: &[
                "Try this query in {client}:",
                "'Search for sentiment analysis datasets on Hugging Face'",
                "",
                "Expected response should include:",
                "- Dataset IDs and authors",
                "- Download counts and likes",
                "- Task categories and tags",
                "",
            ],
            gate: None,
            question: "Did you get dataset search results?",
            on_pass: "Dataset search functionality is working!",
            on_fail: "Dataset search may have issues",
            fail_advice: &[],
            client: client.clone(),
        },
        ManualCheck {
            name: INFERENCE,
            description: "Test running inference through the MCP server",
            instructions: &[
                "⚠  This test requires your HF_TOKEN to be set in the MCP configuration",
                "",
                "Try this query in {client}:",
                "'Generate text using gpt2 with the prompt: The future of artificial intelligence is'",
                "",
                "Expected response should include:",
                "- Generated text completion",
                "- Model information",
                "- Generation parameters used",
                "",
            ],
            gate: Some(Gate {
                question: "Do you have HF_TOKEN configured?",
                skip_notice: "Skipping inference test - HF_TOKEN not configured",
                skip_advice: &[
                    "To enable inference, add your Hugging Face token to the MCP configuration",
                ],
            }),
            question: "Did text generation work successfully?",
            on_pass: "Text generation inference is working!",
            on_fail: "Text generation inference may have issues",
            fail_advice: &["Check your HF_TOKEN configuration"],
            client: client.clone(),
        },
        ManualCheck {
            name: SPACES_SEARCH,
            description: "Test searching for Hugging Face Spaces",
            instructions: &[
                "Try this query in {client}:",
                "'Search for chatbot spaces on Hugging Face'",
                "",
                "Expected response should include:",
                "- Space IDs and authors",
                "- Titles and descriptions",
                "- SDK information (Gradio, Streamlit, etc.)",
                "- Stage and tags",
                "",
            ],
            gate: None,
            question: "Did you get spaces search results?",
            on_pass: "Spaces search functionality is working!",
            on_fail: "Spaces search may have issues",
            fail_advice: &[],
            client: client.clone(),
        },
        ManualCheck {
            name: ERROR_HANDLING,
            description: "Test how the server handles invalid requests",
            instructions: &[
                "Try these intentionally problematic queries in {client}:",
                "1. 'Get information about a non-existent model: fake/nonexistent-model'",
                "2. 'Search for models with an empty query'",
                "",
                "Expected behavior:",
                "- Should return helpful error messages",
                "- Should not crash or hang",
                "- Should provide guidance on valid inputs",
                "",
            ],
            gate: None,
            question: "Did error cases return helpful error messages?",
            on_pass: "Error handling is working properly!",
            on_fail: "Error handling may need improvement",
            fail_advice: &[],
            client: client.clone(),
        },
        ManualCheck {
            name: COMPREHENSIVE,
            description: "Test multiple features in sequence",
            instructions: &[
                "Copy and paste this comprehensive test prompt into {client}:",
                "",
                "Please help me test the Hugging Face MCP server by doing the following:",
                "",
                "1. Search for the top 3 most popular text-generation models",
                "2. Get detailed information about 'distilbert-base-uncased'",
                "3. Search for 2 datasets related to 'question answering'",
                "4. Find 2 spaces related to 'image generation'",
                "5. If you have access, try generating text with 'gpt2' using prompt: 'Hello world'",
                "",
                "Please provide a summary of what worked and what didn't.",
                "",
            ],
            gate: None,
            question: "Did the comprehensive test complete successfully?",
            on_pass: "Comprehensive test passed! Your MCP server is fully functional!",
            on_fail: "Some parts of the comprehensive test failed",
            fail_advice: &[],
            client,
        },
    ];

    checks
        .into_iter()
        .map(|check| Box::new(check) as Box<dyn Check>)
        .collect()
}
