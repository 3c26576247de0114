//! CROC (CMS flavour) global configuration registers.

use super::{ro, rw, RegisterSpec};

#[rustfmt::skip]
pub(super) static CROC_REGISTERS: [RegisterSpec; 151] = [
    rw("PIX_PORTAL", 0, &[16], &[0]),
    rw("REGION_COL", 1, &[8], &[0]),
    rw("REGION_ROW", 2, &[9], &[0]),
    rw("PIX_MODE", 3, &[1, 1, 1], &[0, 1, 0]),
    rw("PIX_DEFAULT_CONFIG", 4, &[16], &[0]),
    rw("PIX_DEFAULT_CONFIG_B", 5, &[16], &[0]),
    rw("GCR_DEFAULT_CONFIG", 6, &[16], &[0]),
    rw("GCR_DEFAULT_CONFIG_B", 7, &[16], &[0]),
    rw("DAC_PREAMP_L_DIFF", 8, &[10], &[50]),
    rw("DAC_PREAMP_R_DIFF", 9, &[10], &[50]),
    rw("DAC_PREAMP_TL_DIFF", 10, &[10], &[50]),
    rw("DAC_PREAMP_TR_DIFF", 11, &[10], &[50]),
    rw("DAC_PREAMP_T_DIFF", 12, &[10], &[50]),
    rw("DAC_PREAMP_M_DIFF", 13, &[10], &[50]),
    rw("DAC_PRECOMP_DIFF", 14, &[10], &[50]),
    rw("DAC_COMP_DIFF", 15, &[10], &[50]),
    rw("DAC_VFF_DIFF", 16, &[10], &[100]),
    rw("DAC_TH1_L_DIFF", 17, &[10], &[100]),
    rw("DAC_TH1_R_DIFF", 18, &[10], &[100]),
    rw("DAC_TH1_M_DIFF", 19, &[10], &[100]),
    rw("DAC_TH2_DIFF", 20, &[10], &[0]),
    rw("DAC_LCC_DIFF", 21, &[10], &[100]),
    rw("DAC_PREAMP_L_LIN", 22, &[10], &[300]),
    rw("DAC_PREAMP_R_LIN", 23, &[10], &[300]),
    rw("DAC_PREAMP_TL_LIN", 24, &[10], &[300]),
    rw("DAC_PREAMP_TR_LIN", 25, &[10], &[300]),
    rw("DAC_PREAMP_T_LIN", 26, &[10], &[300]),
    rw("DAC_PREAMP_M_LIN", 27, &[10], &[300]),
    rw("DAC_FC_LIN", 28, &[10], &[20]),
    rw("DAC_KRUM_CURR_LIN", 29, &[10], &[50]),
    rw("DAC_REF_KRUM_LIN", 30, &[10], &[300]),
    rw("DAC_COMP_LIN", 31, &[10], &[110]),
    rw("DAC_COMP_TA_LIN", 32, &[10], &[110]),
    rw("DAC_GDAC_L_LIN", 33, &[10], &[408]),
    rw("DAC_GDAC_R_LIN", 34, &[10], &[408]),
    rw("DAC_GDAC_M_LIN", 35, &[10], &[408]),
    rw("DAC_LDAC_LIN", 36, &[10], &[100]),
    rw("LEACKAGE_FEEDBACK", 37, &[1, 1], &[0, 0]),
    rw("VOLTAGE_TRIM", 38, &[1, 1, 4, 4], &[0, 0, 8, 8]),
    rw("EnCoreCol_3", 39, &[1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0]),
    rw("EnCoreCol_2", 40, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("EnCoreCol_1", 41, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("EnCoreCol_0", 42, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("EnCoreColumnReset_3", 43, &[1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0]),
    rw("EnCoreColumnReset_2", 44, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("EnCoreColumnReset_1", 45, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("EnCoreColumnReset_0", 46, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("TriggerConfig", 47, &[1, 9], &[0, 500]),
    rw("SelfTriggerConfig_1", 48, &[1, 1, 4], &[0, 1, 1]),
    rw("SelfTriggerConfig_0", 49, &[10, 5], &[100, 1]),
    rw("HitOrPatternLUT", 50, &[16], &[0]),
    rw("ReadTriggerConfig", 51, &[2, 12], &[0, 1000]),
    rw("TruncationTimeoutConf", 52, &[12], &[0]),
    rw("CalibrationConfig", 53, &[1, 1, 6], &[0, 0, 0]),
    rw("CLK_DATA_FINE_DELAY", 54, &[6, 6], &[0, 0]),
    rw("VCAL_HIGH", 55, &[12], &[500]),
    rw("VCAL_MED", 56, &[12], &[300]),
    rw("MEAS_CAP", 57, &[1, 1, 1], &[0, 0, 0]),
    rw("CdrConf", 58, &[1, 1, 3], &[0, 0, 0]),
    rw("CkEnConf", 59, &[3, 3, 3, 3], &[7, 7, 7, 7]),
    rw("ChSyncConf", 60, &[5], &[16]),
    rw("GlobalPulseConf", 61, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("GlobalPulseWidth", 62, &[8], &[1]),
    rw("ServiceDataConf", 63, &[1, 8], &[0, 50]),
    rw("ToTConfig", 64, &[1, 1, 1, 1, 9], &[0, 0, 0, 0, 500]),
    rw("PrecisionToTEnable_3", 65, &[1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0]),
    rw("PrecisionToTEnable_2", 66, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("PrecisionToTEnable_1", 67, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("PrecisionToTEnable_0", 68, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("DataMerging", 69, &[4, 1, 1, 1, 4, 1, 1], &[0, 1, 1, 0, 0, 0, 1]),
    rw("DataMergingMux", 70, &[2, 2, 2, 2, 2, 2, 2, 2], &[3, 2, 1, 0, 3, 2, 1, 0]),
    rw("EnCoreColumnCalibration_3", 71, &[1, 1, 1, 1, 1, 1], &[1, 1, 1, 1, 1, 1]),
    rw("EnCoreColumnCalibration_2", 72, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
    rw("EnCoreColumnCalibration_1", 73, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
    rw("EnCoreColumnCalibration_0", 74, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
    rw("DataConcentratorConf", 75, &[1, 1, 1, 8], &[0, 0, 1, 16]),
    rw("CoreColEncoderConf", 76, &[1, 1, 4, 3], &[0, 0, 0, 0]),
    rw("EnHitsRemoval_3", 77, &[16], &[0]),
    rw("EnHitsRemoval_2", 78, &[16], &[0]),
    rw("EnHitsRemoval_1", 79, &[16], &[0]),
    rw("EnHitsRemoval_0", 80, &[6], &[0]),
    rw("EnIsolHitsRemoval_3", 81, &[16], &[0]),
    rw("EnIsolHitsRemoval_2", 82, &[16], &[0]),
    rw("EnIsolHitsRemoval_1", 83, &[16], &[0]),
    rw("EnIsolHitsRemoval_0", 84, &[6], &[0]),
    rw("EvenMask", 85, &[16], &[0]),
    rw("OddMask", 86, &[16], &[0]),
    rw("EfusesConfig", 87, &[16], &[0]),
    rw("EfusesWriteData1", 88, &[16], &[0]),
    rw("EfusesWriteData0", 89, &[16], &[0]),
    rw("AuroraConfig", 90, &[1, 4, 6, 2], &[0, 1, 25, 3]),
    rw("AURORA_CB_CONFIG1", 91, &[8], &[255]),
    rw("AURORA_CB_CONFIG0", 92, &[12, 4], &[4095, 0]),
    rw("AURORA_INIT_WAIT", 93, &[11], &[32]),
    rw("AURORA_AltOutput_1", 94, &[4], &[0]),
    rw("AURORA_AltOutput_0", 95, &[11], &[0]),
    rw("OUTPUT_PAD_CONFIG", 96, &[4, 1, 1, 4, 3], &[5, 1, 0, 15, 7]),
    rw("GP_CMOS_ROUTE", 97, &[6], &[34]),
    rw("GP_LVDS_ROUTE_1", 98, &[6, 6], &[35, 33]),
    rw("GP_LVDS_ROUTE_0", 99, &[6, 6], &[1, 0]),
    rw("DAC_CP_CDR", 100, &[10], &[40]),
    rw("DAC_CP_FD_CDR", 101, &[10], &[400]),
    rw("DAC_CP_BUFF_CDR", 102, &[10], &[200]),
    rw("DAC_VCO_CDR", 103, &[10], &[1023]),
    rw("DAC_VCOBUFF_CDR", 104, &[10], &[500]),
    rw("SER_SEL_OUT", 105, &[2, 2, 2, 2], &[1, 1, 1, 1]),
    rw("CML_CONFIG", 106, &[2, 2, 4], &[0, 0, 1]),
    rw("DAC_CML_BIAS_2", 107, &[10], &[0]),
    rw("DAC_CML_BIAS_1", 108, &[10], &[0]),
    rw("DAC_CML_BIAS_0", 109, &[10], &[500]),
    rw("MonitorConfig", 110, &[1, 6, 6], &[0, 63, 63]),
    rw("ErrWngMask", 111, &[1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0]),
    rw("MON_SENS_SLDO", 112, &[1, 4, 1, 1, 4, 1], &[0, 0, 0, 0, 0, 0]),
    rw("MON_SENS_ACB", 113, &[1, 4, 1], &[0, 0, 0]),
    rw("MON_ADC", 114, &[1, 1, 1, 6], &[0, 0, 1, 0]),
    rw("DAC_NTC", 115, &[10], &[100]),
    rw("HITOR_MASK_3", 116, &[1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0]),
    rw("HITOR_MASK_2", 117, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("HITOR_MASK_1", 118, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("HITOR_MASK_0", 119, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("AutoRead0", 120, &[9], &[137]),
    rw("AutoRead1", 121, &[9], &[133]),
    rw("AutoRead2", 122, &[9], &[121]),
    rw("AutoRead3", 123, &[9], &[122]),
    rw("AutoRead4", 124, &[9], &[124]),
    rw("AutoRead5", 125, &[9], &[127]),
    rw("AutoRead6", 126, &[9], &[126]),
    rw("AutoRead7", 127, &[9], &[125]),
    rw("RingOscConfig", 128, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("RingOscRoute", 129, &[3, 6], &[0, 0]),
    ro("RING_OSC_A_OUT", 130, &[16], &[0]),
    ro("RING_OSC_B_OUT", 131, &[16], &[0]),
    ro("BCIDCnt", 132, &[16], &[0]),
    ro("TrigCnt", 133, &[16], &[0]),
    ro("ReadTrigCnt", 134, &[16], &[0]),
    ro("LockLossCnt", 135, &[16], &[0]),
    ro("BitFlipWngCnt", 136, &[16], &[0]),
    ro("BitFlipErrCnt", 137, &[16], &[0]),
    ro("CmdErrCnt", 138, &[16], &[0]),
    ro("RdWrFifoErrorCount", 139, &[16], &[0]),
    ro("AI_REGION_ROW", 140, &[9], &[0]),
    ro("HitOr_3_Cnt", 141, &[16], &[0]),
    ro("HitOr_2_Cnt", 142, &[16], &[0]),
    ro("HitOr_1_Cnt", 143, &[16], &[0]),
    ro("HitOr_0_Cnt", 144, &[16], &[0]),
    ro("Pixel_SEU_Cnt", 145, &[16], &[0]),
    ro("GlobalConfig_SEU_Cnt", 146, &[16], &[0]),
    ro("SkippedTriggerCnt", 147, &[16], &[0]),
    ro("EfusesReadData1", 148, &[16], &[0]),
    ro("EfusesReadData0", 149, &[16], &[0]),
    ro("MonitoringDataADC", 150, &[12], &[0]),
];
